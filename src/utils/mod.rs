//! Partitioning and input validation helpers

mod errors;
mod partitions;
mod validation;

pub use errors::UtilsError;
pub use partitions::{Partition, generate_partitions};
pub use validation::{MAX_NUMBERS, validate_numbers};
