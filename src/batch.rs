//! Batch validation of many numbers at once.
//!
//! Each number is validated independently, so batches split freely across
//! threads. Enable the `parallel` feature for rayon-backed variants.

use crate::result::{ResultCode, ValidationResult};
use crate::validate::validate;

/// Validates a slice of numbers, returning results in input order.
///
/// # Example
///
/// ```
/// use luhn_validator::batch::validate_batch;
/// use luhn_validator::ResultCode;
///
/// let results = validate_batch(&["2378", "12378", ""]);
/// assert!(results[0].succeeded());
/// assert_eq!(results[1].code(), ResultCode::NumberFailedValidation);
/// assert_eq!(results[2].code(), ResultCode::NumberEmpty);
/// ```
pub fn validate_batch<S: AsRef<str>>(numbers: &[S]) -> Vec<ValidationResult> {
    numbers.iter().map(|n| validate(n.as_ref())).collect()
}

/// Counts valid and invalid numbers without collecting results.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use luhn_validator::batch::count_valid;
///
/// let (valid, invalid) = count_valid(&["2378", "12378", "4992-7398-716"]);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
pub fn count_valid<S: AsRef<str>>(numbers: &[S]) -> (usize, usize) {
    let valid = numbers
        .iter()
        .filter(|n| validate(n.as_ref()).succeeded())
        .count();

    (valid, numbers.len() - valid)
}

/// Splits a batch into the indices that validated and the indices that
/// failed, along with each failure's code.
///
/// # Example
///
/// ```
/// use luhn_validator::batch::partition_by_outcome;
/// use luhn_validator::ResultCode;
///
/// let (valid, failed) = partition_by_outcome(&["2378", "x", "12378"]);
/// assert_eq!(valid, vec![0]);
/// assert_eq!(
///     failed,
///     vec![(1, ResultCode::InvalidFormat), (2, ResultCode::NumberFailedValidation)]
/// );
/// ```
pub fn partition_by_outcome<S: AsRef<str>>(
    numbers: &[S],
) -> (Vec<usize>, Vec<(usize, ResultCode)>) {
    let mut valid = Vec::new();
    let mut failed = Vec::new();

    for (i, number) in numbers.iter().enumerate() {
        let result = validate(number.as_ref());
        if result.succeeded() {
            valid.push(i);
        } else {
            failed.push((i, result.code()));
        }
    }

    (valid, failed)
}

/// Validates a slice of numbers in parallel, preserving input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<ValidationResult> {
    use rayon::prelude::*;
    numbers.par_iter().map(|n| validate(n.as_ref())).collect()
}

/// Counts valid and invalid numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(numbers: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = numbers
        .par_iter()
        .filter(|n| validate(n.as_ref()).succeeded())
        .count();

    (valid, numbers.len() - valid)
}
