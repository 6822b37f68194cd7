//! Evaluation of expression text under the custom precedence rules

mod core;
mod errors;
mod token;

pub use self::core::Evaluator;
pub use errors::EvalError;
pub use token::{Token, TokenizerMode, tokenize};

/// Evaluate `expression`, silently skipping unknown characters.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate(expression: &str) -> Result<i32, EvalError> {
    Evaluator::new().evaluate(expression)
}

/// Evaluate `expression`, rejecting any character outside the token grammar.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate_strict(expression: &str) -> Result<i32, EvalError> {
    Evaluator::with_mode(TokenizerMode::Strict).evaluate(expression)
}
