use log::{debug, info};
use std::ops::ControlFlow;

use crate::evaluator::evaluate;
use crate::expression::{Expression, SEARCH_ORDER};
use crate::generator::{Candidate, ExpressionGenerator};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;

/// Searches for an expression over a number multiset that hits a target value
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find an expression over `numbers`, each used at most once, whose value
    /// is `target`.
    ///
    /// The first pass streams everything the generator produces for the full
    /// sequence and takes the first match. The second pass walks every
    /// partition, pairs each left expression with each right expression and
    /// tries [`SEARCH_ORDER`] on each pair. The witness returned is the first
    /// match in that fixed order. `None` means the target is unreachable.
    pub fn find_solution(&self, target: i32, numbers: &[i32]) -> Option<Expression> {
        info!("Searching {:?} for {}", numbers, target);

        let mut generator = ExpressionGenerator::with_memoization(self.config.memoize);

        if let ControlFlow::Break(found) = generator.scan(numbers, |c| hit_target(c, target)) {
            info!("Found match while generating: {}", found);
            return Some(found);
        }

        debug!("No match in generated expressions, searching partitions");
        let found = Self::search_partitions(&mut generator, target, numbers);

        match &found {
            Some(expr) => info!("Found match in partition search: {}", expr),
            None => info!("No solution for {} from {:?}", target, numbers),
        }
        found
    }

    pub(crate) fn search_partitions(
        generator: &mut ExpressionGenerator,
        target: i32,
        numbers: &[i32],
    ) -> Option<Expression> {
        if let [only] = numbers {
            return (*only == target).then(|| Expression::number(*only));
        }

        match generator.scan_partition_pairs(numbers, &SEARCH_ORDER, |c| hit_target(c, target)) {
            ControlFlow::Break(found) => Some(found),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Re-evaluate the rendered text of `expr` and check it hits `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or evaluates to a value
    /// other than `target`.
    pub fn verify(&self, expr: &Expression, target: i32) -> Result<i32, SolverError> {
        let actual = evaluate(&expr.to_string())?;
        if actual != target {
            return Err(SolverError::VerificationMismatch {
                expected: target,
                actual,
            });
        }
        debug!("Verified {} = {}", expr, actual);
        Ok(actual)
    }
}

fn hit_target(candidate: Candidate<'_>, target: i32) -> ControlFlow<Expression> {
    if candidate.value() == target {
        ControlFlow::Break(candidate.to_expression())
    } else {
        ControlFlow::Continue(())
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
