//! Input normalization.
//!
//! Turns raw user input into a sequence of digit values:
//!
//! 1. Leading and trailing whitespace is trimmed.
//! 2. The readability separators (space, `-`, `_`, `.`) are dropped.
//! 3. Every remaining character must be a decimal digit of some script.
//!
//! Any other character, including interior tabs and other punctuation, makes
//! the input non-numeric.

use crate::digits::decimal_value;
use crate::error::FormatError;
use zeroize::Zeroizing;

/// Returns `true` if `c` is an accepted separator: space, `-`, `_` or `.`.
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_' | '.')
}

/// Returns `true` if the input is empty or whitespace only.
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Decodes the input into digit values (0-9).
///
/// The returned buffer is wiped when dropped.
///
/// # Errors
///
/// * [`FormatError::Empty`] - the input is empty or whitespace only
/// * [`FormatError::NoDigits`] - only separators remained after trimming
/// * [`FormatError::InvalidCharacter`] - a character is neither a separator
///   nor a decimal digit; `position` counts characters of the trimmed input
///
/// # Example
///
/// ```
/// use luhn_validator::normalize::parse_digits;
///
/// let digits = parse_digits("2378").unwrap();
/// assert_eq!(digits.as_slice(), &[2, 3, 7, 8]);
///
/// // Arabic-Indic digits decode to the same values
/// let digits = parse_digits("\u{0662}\u{0663}\u{0667}\u{0668}").unwrap();
/// assert_eq!(digits.as_slice(), &[2, 3, 7, 8]);
/// ```
pub fn parse_digits(input: &str) -> Result<Zeroizing<Vec<u8>>, FormatError> {
    if is_blank(input) {
        return Err(FormatError::Empty);
    }

    let trimmed = input.trim();

    let mut digits = Zeroizing::new(Vec::with_capacity(trimmed.len()));

    for (position, character) in trimmed.chars().enumerate() {
        if is_separator(character) {
            continue;
        }
        match decimal_value(character) {
            Some(d) => digits.push(d),
            None => {
                return Err(FormatError::InvalidCharacter {
                    position,
                    character,
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(FormatError::NoDigits);
    }

    Ok(digits)
}
