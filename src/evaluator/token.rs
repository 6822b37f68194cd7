use log::debug;
use std::fmt;

use crate::evaluator::errors::EvalError;
use crate::expression::Operator;

/// One lexical unit of expression text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i32),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

impl TryFrom<Token> for Operator {
    type Error = EvalError;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Operator(op) => Ok(op),
            other => Err(EvalError::InvalidOperator(other.to_string())),
        }
    }
}

/// What the tokenizer does with characters outside the token grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerMode {
    /// Drop them silently
    #[default]
    Lenient,
    /// Fail with [`EvalError::UnexpectedCharacter`]
    Strict,
}

/// Split `expression` into tokens.
///
/// Whitespace is removed before scanning, so digits separated only by
/// whitespace form a single literal. Positions in errors are byte offsets
/// into the original text.
///
/// # Errors
///
/// Returns an error for a literal that does not fit in `i32`, or, in
/// [`TokenizerMode::Strict`], for any character outside the token grammar.
pub fn tokenize(expression: &str, mode: TokenizerMode) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<(usize, char)> = expression
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&(position, ch)) = chars.get(i) {
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let token = match ch {
            '0'..='9' => {
                let start = i;
                while chars.get(i).is_some_and(|(_, c)| c.is_ascii_digit()) {
                    i += 1;
                }
                let literal: String = chars
                    .get(start..i)
                    .unwrap_or_default()
                    .iter()
                    .map(|&(_, c)| c)
                    .collect();
                let value = literal
                    .parse::<i32>()
                    .map_err(|_| EvalError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
                continue;
            }
            '+' => Some(Token::Operator(Operator::Add)),
            '-' => Some(Token::Operator(Operator::Sub)),
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            '<' if next == Some('<') => {
                i += 1;
                Some(Token::Operator(Operator::Shl))
            }
            '>' if next == Some('>') => {
                i += 1;
                Some(Token::Operator(Operator::Shr))
            }
            _ => match mode {
                TokenizerMode::Lenient => {
                    debug!("Skipping unrecognized character '{}' at {}", ch, position);
                    None
                }
                TokenizerMode::Strict => {
                    return Err(EvalError::UnexpectedCharacter {
                        found: ch,
                        position,
                    });
                }
            },
        };

        tokens.extend(token);
        i += 1;
    }

    Ok(tokens)
}
