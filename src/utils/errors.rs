use thiserror::Error;

/// Errors raised while checking solver input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number list cannot be empty")]
    EmptyNumbers,
    #[error("Numbers must not be negative: {0}")]
    NegativeNumber(i32),
    #[error("Too many numbers: {count} (at most {max} supported)")]
    TooManyNumbers { count: usize, max: usize },
}
