use log::debug;
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::expression::{Combination, Expression, GENERATION_ORDER};
use crate::generator::candidate::Candidate;
use crate::utils::generate_partitions;

/// Memoization cache keyed by the exact ordered sub-sequence
type ExprCache = HashMap<Vec<i32>, Rc<[Expression]>>;

/// Exhaustive bottom-up enumeration of expressions over a number sequence
pub struct ExpressionGenerator {
    memoize: bool,
    cache: ExprCache,
}

impl ExpressionGenerator {
    pub fn new() -> Self {
        Self::with_memoization(true)
    }

    /// Caching changes speed and memory use only; output and its order are the
    /// same either way.
    pub fn with_memoization(memoize: bool) -> Self {
        Self {
            memoize,
            cache: HashMap::new(),
        }
    }

    /// Number of sub-sequences currently held in the cache
    pub fn cached_sequences(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Every expression reachable from `numbers`.
    ///
    /// With two or more numbers the result starts with each number on its own,
    /// followed by the combinations of every partition, every operand pair
    /// and every entry of [`GENERATION_ORDER`], in that nesting.
    pub fn generate(&mut self, numbers: &[i32]) -> Vec<Expression> {
        let mut expressions = Vec::new();
        let _ = self.scan(numbers, |candidate| {
            expressions.push(candidate.to_expression());
            ControlFlow::<()>::Continue(())
        });
        debug!(
            "Generated {} expressions from {:?}",
            expressions.len(),
            numbers
        );
        expressions
    }

    /// Stream the output of [`generate`](Self::generate) through `visit`, in
    /// the same order, stopping as soon as it breaks.
    pub fn scan<B, F>(&mut self, numbers: &[i32], mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(Candidate<'_>) -> ControlFlow<B>,
    {
        match numbers {
            [] => ControlFlow::Continue(()),
            [only] => visit(Candidate::Number(*only)),
            _ => {
                for &number in numbers {
                    visit(Candidate::Number(number))?;
                }
                self.scan_partition_pairs(numbers, &GENERATION_ORDER, visit)
            }
        }
    }

    /// Visit every combination of sub-expressions across every partition.
    ///
    /// Loops nest as partition (bit-index order), then left operand, then
    /// right operand, then `order`.
    pub fn scan_partition_pairs<B, F>(
        &mut self,
        numbers: &[i32],
        order: &[Combination],
        mut visit: F,
    ) -> ControlFlow<B>
    where
        F: FnMut(Candidate<'_>) -> ControlFlow<B>,
    {
        for partition in generate_partitions(numbers) {
            let left = self.expressions_for(&partition.left);
            let right = self.expressions_for(&partition.right);

            for a in left.iter() {
                for b in right.iter() {
                    for &combination in order {
                        visit(Candidate::Pair { combination, a, b })?;
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn expressions_for(&mut self, numbers: &[i32]) -> Rc<[Expression]> {
        if self.memoize
            && let Some(cached) = self.cache.get(numbers)
        {
            return Rc::clone(cached);
        }

        let expressions: Rc<[Expression]> = self.generate(numbers).into();
        if self.memoize {
            self.cache.insert(numbers.to_vec(), Rc::clone(&expressions));
        }
        expressions
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
