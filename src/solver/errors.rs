use thiserror::Error;

use crate::evaluator::EvalError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UtilsError),
    #[error("Expression evaluation error: {0}")]
    Evaluation(#[from] EvalError),
    #[error("Witness evaluates to {actual}, expected {expected}")]
    VerificationMismatch { expected: i32, actual: i32 },
}
