use log::debug;

use crate::evaluator::errors::EvalError;
use crate::evaluator::token::{Token, TokenizerMode, tokenize};
use crate::expression::Operator;

/// Entry on the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    OpenParen,
    Apply(Operator),
}

/// Two-stack evaluator for expression text.
///
/// Parentheses bind tightest, then `+` and `-`, then `<<` and `>>`. Operators
/// of equal precedence associate to the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    mode: TokenizerMode,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: TokenizerMode) -> Self {
        Self { mode }
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - a `)` has no matching `(`, or a `(` is never closed
    /// - an operator is missing an operand, or more than one value is left over
    /// - a literal does not fit in `i32`
    /// - an unknown character is found in strict mode
    pub fn evaluate(&self, expression: &str) -> Result<i32, EvalError> {
        debug!("Evaluating expression: {}", expression);

        let tokens = tokenize(expression, self.mode)?;
        let mut values: Vec<i32> = Vec::new();
        let mut pending: Vec<Pending> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(n) => values.push(n),
                Token::OpenParen => pending.push(Pending::OpenParen),
                Token::CloseParen => loop {
                    match pending.pop() {
                        Some(Pending::OpenParen) => break,
                        Some(Pending::Apply(op)) => apply_top(&mut values, op)?,
                        None => return Err(EvalError::MismatchedParentheses),
                    }
                },
                other => {
                    let operator = Operator::try_from(other)?;
                    while let Some(&Pending::Apply(top)) = pending.last() {
                        if top.precedence() < operator.precedence() {
                            break;
                        }
                        pending.pop();
                        apply_top(&mut values, top)?;
                    }
                    pending.push(Pending::Apply(operator));
                }
            }
        }

        while let Some(entry) = pending.pop() {
            match entry {
                Pending::Apply(op) => apply_top(&mut values, op)?,
                Pending::OpenParen => return Err(EvalError::MismatchedParentheses),
            }
        }

        let result = match values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::InvalidExpressionFormat),
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}

/// Pop two operands, apply `operator` as `first op second`, push the result
fn apply_top(values: &mut Vec<i32>, operator: Operator) -> Result<(), EvalError> {
    let second = values.pop().ok_or(EvalError::InvalidExpressionFormat)?;
    let first = values.pop().ok_or(EvalError::InvalidExpressionFormat)?;
    values.push(operator.apply(first, second));
    Ok(())
}
