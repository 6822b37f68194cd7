use crate::expression::{Combination, Expression};

/// An expression the generator is about to emit, not yet allocated.
///
/// Scanning for a target only needs the value, so the tree is built only
/// for candidates that are kept.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Number(i32),
    Pair {
        combination: Combination,
        a: &'a Expression,
        b: &'a Expression,
    },
}

impl Candidate<'_> {
    pub fn value(&self) -> i32 {
        match *self {
            Candidate::Number(n) => n,
            Candidate::Pair { combination, a, b } => combination.apply(a.value(), b.value()),
        }
    }

    pub fn to_expression(&self) -> Expression {
        match *self {
            Candidate::Number(n) => Expression::number(n),
            Candidate::Pair { combination, a, b } => Expression::combine(combination, a, b),
        }
    }
}
