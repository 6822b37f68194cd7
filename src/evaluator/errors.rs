use thiserror::Error;

/// Syntax errors raised while evaluating expression text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Invalid expression format")]
    InvalidExpressionFormat,
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Number literal out of range: {0}")]
    InvalidNumber(String),
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
}
