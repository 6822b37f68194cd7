use std::fmt;

use crate::expression::ast::{Expression, Term};

impl fmt::Display for Expression {
    /// Fully parenthesized, so the text re-parses to the same value under any
    /// precedence rules.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.term() {
            Term::Number(n) => write!(f, "{}", n),
            Term::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.symbol(), right),
        }
    }
}

impl Expression {
    /// `"<text> = <value>"`
    pub fn describe(&self) -> String {
        format!("{} = {}", self, self.value())
    }
}
