//! Recursive expression generation over number partitions

mod candidate;
mod core;

pub use candidate::Candidate;
pub use self::core::ExpressionGenerator;
