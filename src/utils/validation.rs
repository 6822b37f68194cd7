use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Largest input the exhaustive search is allowed to start on
pub const MAX_NUMBERS: usize = 10;

/// # Errors
///
/// Returns an error if the list is empty, holds a negative number, or is
/// longer than [`MAX_NUMBERS`].
pub fn validate_numbers(numbers: &[i32]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Number list is empty");
        return Err(UtilsError::EmptyNumbers);
    }

    if numbers.len() > MAX_NUMBERS {
        warn!("Too many numbers: {} (max {})", numbers.len(), MAX_NUMBERS);
        return Err(UtilsError::TooManyNumbers {
            count: numbers.len(),
            max: MAX_NUMBERS,
        });
    }

    if let Some(&negative) = numbers.iter().find(|&&n| n < 0) {
        warn!("Negative number in input: {}", negative);
        return Err(UtilsError::NegativeNumber(negative));
    }

    debug!("Number validation successful");
    Ok(())
}
