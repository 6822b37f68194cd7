use std::rc::Rc;

use crate::expression::ops::{Combination, Operator};

/// Shape of an expression tree
#[derive(Debug)]
pub(crate) enum Term {
    Number(i32),
    Binary {
        operator: Operator,
        left: Expression,
        right: Expression,
    },
}

/// An arithmetic expression paired with its precomputed value.
///
/// Sub-trees are shared, so cloning is cheap and combining two expressions
/// never copies either side.
#[derive(Debug, Clone)]
pub struct Expression {
    value: i32,
    term: Rc<Term>,
}

impl Expression {
    /// A bare number literal
    pub fn number(value: i32) -> Self {
        Self {
            value,
            term: Rc::new(Term::Number(value)),
        }
    }

    /// Join `a` and `b` using `combination`, operands swapped if it says so.
    pub fn combine(combination: Combination, a: &Expression, b: &Expression) -> Self {
        let (left, right) = if combination.swapped { (b, a) } else { (a, b) };
        Self::binary(combination.operator, left, right)
    }

    /// `(left op right)`
    pub fn binary(operator: Operator, left: &Expression, right: &Expression) -> Self {
        Self {
            value: operator.apply(left.value, right.value),
            term: Rc::new(Term::Binary {
                operator,
                left: left.clone(),
                right: right.clone(),
            }),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn operator_count(&self) -> usize {
        match self.term.as_ref() {
            Term::Number(_) => 0,
            Term::Binary { left, right, .. } => 1 + left.operator_count() + right.operator_count(),
        }
    }

    /// Literal leaves in the order they appear in the rendered text
    pub fn numbers(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.collect_numbers(&mut out);
        out
    }

    fn collect_numbers(&self, out: &mut Vec<i32>) {
        match self.term.as_ref() {
            Term::Number(n) => out.push(*n),
            Term::Binary { left, right, .. } => {
                left.collect_numbers(out);
                right.collect_numbers(out);
            }
        }
    }

    pub(crate) fn term(&self) -> &Term {
        &self.term
    }
}
