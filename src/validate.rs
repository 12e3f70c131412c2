//! Validation pipeline.
//!
//! Stages run in a fixed order and each one short-circuits the next:
//!
//! 1. empty check ([`ResultCode::NumberEmpty`])
//! 2. separator stripping and digit decoding ([`ResultCode::InvalidFormat`])
//! 3. Luhn checksum ([`ResultCode::Valid`] or
//!    [`ResultCode::NumberFailedValidation`])
//!
//! Every input maps to exactly one result; nothing here panics or returns an
//! error. Outcomes are reported as `tracing` debug events with the number
//! masked.

use crate::error::FormatError;
use crate::luhn;
use crate::mask::mask_digits;
use crate::normalize::parse_digits;
use crate::result::{ResultCode, ValidationResult, VALID_RESULT};
use tracing::debug;

/// Validates a card or identification number.
///
/// Accepts spaces, hyphens, underscores and periods as separators, and
/// decimal digits from any script.
///
/// # Example
///
/// ```
/// use luhn_validator::{validate, ResultCode, VALID_RESULT};
///
/// assert_eq!(validate("4992 7398 716"), VALID_RESULT);
///
/// let result = validate("59927398716");
/// assert!(!result.succeeded());
/// assert_eq!(result.code(), ResultCode::NumberFailedValidation);
/// assert_eq!(result.message(), "Invalid: card number failed validation");
///
/// assert_eq!(validate("A4B992C73D98E716F").code(), ResultCode::InvalidFormat);
/// assert_eq!(validate("   ").code(), ResultCode::NumberEmpty);
/// ```
pub fn validate(card_number: &str) -> ValidationResult {
    let digits = match parse_digits(card_number) {
        Ok(digits) => digits,
        Err(err) => {
            let code = ResultCode::from(&err);
            match err {
                FormatError::Empty => {
                    debug!(code = %code, "card number failed validation - no card number specified");
                }
                FormatError::NoDigits => {
                    debug!(code = %code, "card number failed validation - only separators given");
                }
                FormatError::InvalidCharacter { position, .. } => {
                    debug!(
                        code = %code,
                        position,
                        "card number failed validation - not a valid numeric format"
                    );
                }
            }
            return ValidationResult::new(code);
        }
    };

    if luhn::validate(&digits) {
        debug!(
            code = %ResultCode::Valid,
            length = digits.len(),
            number = %mask_digits(&digits),
            "card number validated"
        );
        VALID_RESULT
    } else {
        debug!(
            code = %ResultCode::NumberFailedValidation,
            length = digits.len(),
            number = %mask_digits(&digits),
            "card number failed validation - checksum mismatch"
        );
        ValidationResult::new(ResultCode::NumberFailedValidation)
    }
}

/// Validates a number that may be absent.
///
/// `None` is treated like blank input.
///
/// # Example
///
/// ```
/// use luhn_validator::{validate_optional, ResultCode};
///
/// assert_eq!(validate_optional(None).code(), ResultCode::NumberEmpty);
/// assert!(validate_optional(Some("2378")).succeeded());
/// ```
pub fn validate_optional(card_number: Option<&str>) -> ValidationResult {
    match card_number {
        Some(input) => validate(input),
        None => {
            debug!(code = %ResultCode::NumberEmpty, "card number failed validation - no card number specified");
            ValidationResult::new(ResultCode::NumberEmpty)
        }
    }
}

/// Quickly checks if a number is valid without returning the outcome code.
///
/// # Example
///
/// ```
/// use luhn_validator::is_valid;
///
/// assert!(is_valid("2220-8592-2141-2918"));
/// assert!(!is_valid("3220-8592-2141-2918"));
/// ```
#[inline]
pub fn is_valid(card_number: &str) -> bool {
    validate(card_number).succeeded()
}

/// Computes the check digit that completes a partial number.
///
/// The partial number is normalized exactly like [`validate`] input.
///
/// # Errors
///
/// Returns a [`FormatError`] if the partial number is blank or not numeric.
///
/// # Example
///
/// ```
/// use luhn_validator::{check_digit, is_valid};
///
/// let digit = check_digit("4992 7398 71").unwrap();
/// assert_eq!(digit, 6);
/// assert!(is_valid(&format!("4992 7398 71{}", digit)));
///
/// assert!(check_digit("12a").is_err());
/// ```
pub fn check_digit(partial: &str) -> Result<u8, FormatError> {
    let digits = parse_digits(partial)?;
    Ok(luhn::generate_check_digit(&digits))
}
