//! Luhn checksum over decoded digit values.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) numbers the
//! digits from the right, starting at 1 for the check digit. Digits in even
//! positions are doubled, and a doubled value of 10 or more is replaced by
//! the sum of its two digits. The number is valid when the total is a
//! multiple of 10.
//!
//! For `2378`: `8 + (7*2 = 14 -> 1+4 = 5) + 3 + (2*2 = 4) = 20`, so it is
//! valid. Prefixing a `1` (position 5, not doubled) makes the total 21.
//!
//! Functions here take digit values (0-9), not characters; use
//! [`normalize::parse_digits`](crate::normalize::parse_digits) to decode
//! text first.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence using the Luhn algorithm.
///
/// Returns `false` for an empty slice.
///
/// # Panics
///
/// Panics if any element is greater than 9.
///
/// # Example
///
/// ```
/// use luhn_validator::luhn::validate;
///
/// assert!(validate(&[2, 3, 7, 8]));
/// assert!(!validate(&[1, 2, 3, 7, 8]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a sequence of digits (not reduced modulo 10).
///
/// # Panics
///
/// Panics if any element is greater than 9.
///
/// # Example
///
/// ```
/// use luhn_validator::luhn::compute_checksum;
///
/// assert_eq!(compute_checksum(&[2, 3, 7, 8]), 20);
/// assert_eq!(compute_checksum(&[1, 2, 3, 7, 8]), 21);
/// ```
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    sum_from_right(digits.iter().rev().copied())
}

/// Generates the check digit for a partial number.
///
/// Given the digits without the check digit, computes the digit that makes
/// the full number pass [`validate`].
///
/// # Panics
///
/// Panics if any element is greater than 9.
///
/// # Example
///
/// ```
/// use luhn_validator::luhn::generate_check_digit;
///
/// assert_eq!(generate_check_digit(&[2, 3, 7]), 8);
/// assert_eq!(generate_check_digit(&[4, 9, 9, 2, 7, 3, 9, 8, 7, 1]), 6);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // A placeholder check digit of 0 shifts every existing digit one
    // position left without changing the sum.
    let sum = sum_from_right(std::iter::once(0).chain(digits.iter().rev().copied()));

    ((10 - (sum % 10)) % 10) as u8
}

/// Luhn sum over digits ordered from the check digit leftwards.
///
/// Accumulates in `u64`; overflowing it would take more digits than fit
/// in memory.
#[inline]
fn sum_from_right<I: Iterator<Item = u8>>(digits: I) -> u64 {
    // Index 0 is position 1 (the check digit), so odd indices are the
    // doubled even positions.
    digits
        .enumerate()
        .map(|(i, digit)| {
            debug_assert!(digit < 10, "digit value {} out of range", digit);
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u64
            } else {
                digit as u64
            }
        })
        .sum()
}
