//! Validation outcomes.
//!
//! Every call to [`validate`](crate::validate) yields a [`ValidationResult`]
//! carrying one of four [`ResultCode`]s. The success flag and the message are
//! derived from the code, so a result can never disagree with itself.

use std::fmt;
use std::str::FromStr;

/// Message for inputs that are absent or contain only whitespace.
pub const NUMBER_EMPTY_MESSAGE: &str = "Invalid: card number cannot be null, empty or blank";

/// Message for inputs containing anything other than digits and separators.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid: card number must be numeric";

/// Message for numeric inputs whose Luhn sum is not a multiple of 10.
pub const FAILED_VALIDATION_MESSAGE: &str = "Invalid: card number failed validation";

/// Message for inputs that pass validation.
pub const VALID_MESSAGE: &str = "Valid";

/// The canonical result returned for every successful validation.
///
/// # Example
///
/// ```
/// use luhn_validator::{validate, VALID_RESULT};
///
/// assert_eq!(validate("4992-7398-716"), VALID_RESULT);
/// ```
pub const VALID_RESULT: ValidationResult = ValidationResult::new(ResultCode::Valid);

/// Closed set of validation outcomes.
///
/// Callers should branch on the code, never on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ResultCode {
    /// Numeric and the checksum holds.
    Valid,
    /// Not numeric after separators are stripped.
    InvalidFormat,
    /// Numeric, but the Luhn sum is not a multiple of 10.
    NumberFailedValidation,
    /// Absent, empty or whitespace-only input.
    NumberEmpty,
}

impl ResultCode {
    /// All codes, in evaluation order of the pipeline's terminal states.
    pub const ALL: [ResultCode; 4] = [
        ResultCode::NumberEmpty,
        ResultCode::InvalidFormat,
        ResultCode::NumberFailedValidation,
        ResultCode::Valid,
    ];

    /// Returns the upper-snake name of the code, e.g. `"INVALID_FORMAT"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::NumberFailedValidation => "NUMBER_FAILED_VALIDATION",
            Self::NumberEmpty => "NUMBER_EMPTY",
        }
    }

    /// Returns the fixed human-readable message for this code.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Valid => VALID_MESSAGE,
            Self::InvalidFormat => INVALID_FORMAT_MESSAGE,
            Self::NumberFailedValidation => FAILED_VALIDATION_MESSAGE,
            Self::NumberEmpty => NUMBER_EMPTY_MESSAGE,
        }
    }

    /// Returns `true` only for [`ResultCode::Valid`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown result code name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResultCodeError {
    name: String,
}

impl fmt::Display for ParseResultCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown result code '{}'", self.name.escape_default())
    }
}

impl std::error::Error for ParseResultCodeError {}

impl FromStr for ResultCode {
    type Err = ParseResultCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseResultCodeError {
                name: s.to_string(),
            })
    }
}

/// Outcome of validating one input.
///
/// Immutable and cheap to copy. Equality is structural, so any successful
/// result compares equal to [`VALID_RESULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    code: ResultCode,
}

impl ValidationResult {
    /// Creates the result for a given code.
    #[inline]
    pub const fn new(code: ResultCode) -> Self {
        Self { code }
    }

    /// Whether the input was numeric and passed the checksum.
    #[inline]
    pub const fn succeeded(&self) -> bool {
        self.code.is_success()
    }

    /// Display message for the outcome.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.code.message()
    }

    /// The outcome code.
    #[inline]
    pub const fn code(&self) -> ResultCode {
        self.code
    }
}

impl From<ResultCode> for ValidationResult {
    fn from(code: ResultCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("succeeded", &self.succeeded())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("code", &self.code)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_table() {
        assert_eq!(
            ResultCode::NumberEmpty.message(),
            "Invalid: card number cannot be null, empty or blank"
        );
        assert_eq!(
            ResultCode::InvalidFormat.message(),
            "Invalid: card number must be numeric"
        );
        assert_eq!(
            ResultCode::NumberFailedValidation.message(),
            "Invalid: card number failed validation"
        );
        assert_eq!(ResultCode::Valid.message(), "Valid");
    }

    #[test]
    fn test_succeeded_iff_valid() {
        for code in ResultCode::ALL {
            let result = ValidationResult::new(code);
            assert_eq!(result.succeeded(), code == ResultCode::Valid);
            assert_eq!(result.code(), code);
            assert_eq!(result.message(), code.message());
        }
    }

    #[test]
    fn test_valid_result_constant() {
        assert!(VALID_RESULT.succeeded());
        assert_eq!(VALID_RESULT.code(), ResultCode::Valid);
        assert_eq!(VALID_RESULT.message(), "Valid");
        assert_eq!(ValidationResult::from(ResultCode::Valid), VALID_RESULT);
    }

    #[test]
    fn test_code_names_parse_back() {
        for code in ResultCode::ALL {
            assert_eq!(code.as_str().parse::<ResultCode>(), Ok(code));
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn test_unknown_code_name() {
        let err = "valid".parse::<ResultCode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown result code 'valid'");
        assert!("UNKNOWN".parse::<ResultCode>().is_err());
    }

    #[test]
    fn test_display() {
        let result = ValidationResult::new(ResultCode::InvalidFormat);
        assert_eq!(
            result.to_string(),
            "Invalid: card number must be numeric (INVALID_FORMAT)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&VALID_RESULT).unwrap();
        assert_eq!(json, r#"{"succeeded":true,"message":"Valid","code":"VALID"}"#);

        let code: ResultCode = serde_json::from_str(r#""NUMBER_FAILED_VALIDATION""#).unwrap();
        assert_eq!(code, ResultCode::NumberFailedValidation);
    }
}
