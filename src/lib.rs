//! Countdown - A solver for a shift-flavoured Countdown numbers game
//!
//! Given a target and a multiset of numbers, the solver looks for an expression
//! over `+`, `-`, `<<` and `>>` that uses each number at most once and hits the
//! target. Addition and subtraction bind tighter than the shifts; parentheses
//! bind tightest. The evaluator re-derives the value of any expression text
//! under the same rules.

pub mod evaluator;
pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export the main public API
pub use evaluator::{EvalError, Evaluator, TokenizerMode, evaluate, evaluate_strict};
pub use expression::{Expression, Operator};
pub use generator::ExpressionGenerator;
pub use solver::{ExpressionSolver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find an expression over `numbers` that evaluates to `target`
///
/// Returns the fully parenthesized text of the first witness in the solver's
/// fixed search order, or `None` when the target cannot be reached.
///
/// The search is exponential in `numbers.len()` and no input check is made
/// here; [`solve`] rejects more than [`utils::MAX_NUMBERS`] numbers. Beyond
/// `usize::BITS` numbers no partitions are formed and only single numbers
/// can match.
///
/// # Examples
///
/// ```
/// use countdown::{evaluate, find_solution};
///
/// let text = find_solution(8, &[3, 5]);
/// assert_eq!(text.as_deref(), Some("(3 + 5)"));
/// assert_eq!(evaluate("(3 + 5)"), Ok(8));
/// assert_eq!(find_solution(7, &[3, 5]), None);
/// ```
pub fn find_solution(target: i32, numbers: &[i32]) -> Option<String> {
    ExpressionSolver::default()
        .find_solution(target, numbers)
        .map(|expr| expr.to_string())
}

/// Validate `numbers`, then search for an expression that hits `target`
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no matching expression is found
/// * `Err(SolverError)` - If the input is rejected
///
/// # Errors
///
/// This function will return an error if:
/// * The number list is empty
/// * A number is negative
/// * There are more than [`utils::MAX_NUMBERS`] numbers
pub fn solve(target: i32, numbers: &[i32]) -> Result<Option<Expression>, SolverError> {
    validate_numbers(numbers)?;

    let solver = ExpressionSolver::default();
    Ok(solver.find_solution(target, numbers))
}
