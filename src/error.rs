//! Error types for input normalization.
//!
//! [`validate`](crate::validate) never returns these; it folds them into a
//! [`ResultCode`]. They surface from the lower-level helpers that need a
//! parsed digit sequence, such as [`check_digit`](crate::check_digit).

use crate::ResultCode;
use std::fmt;

/// Reasons an input cannot be read as a digit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input was absent, empty or whitespace only.
    Empty,

    /// Nothing but separators remained after trimming.
    NoDigits,

    /// A character that is neither a separator nor a decimal digit.
    InvalidCharacter {
        /// Character index within the trimmed input (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, hyphens, underscores and periods allowed)",
                    character.escape_default(),
                    position
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<&FormatError> for ResultCode {
    fn from(err: &FormatError) -> Self {
        match err {
            FormatError::Empty => ResultCode::NumberEmpty,
            FormatError::NoDigits | FormatError::InvalidCharacter { .. } => {
                ResultCode::InvalidFormat
            }
        }
    }
}

impl From<FormatError> for ResultCode {
    fn from(err: FormatError) -> Self {
        ResultCode::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FormatError::Empty.to_string(), "card number is empty");
        assert_eq!(
            FormatError::NoDigits.to_string(),
            "card number contains no digits"
        );
        assert_eq!(
            FormatError::InvalidCharacter {
                position: 3,
                character: 'x'
            }
            .to_string(),
            "invalid character 'x' at position 3 (only digits, spaces, hyphens, underscores and periods allowed)"
        );
        assert_eq!(
            FormatError::InvalidCharacter {
                position: 0,
                character: 'é'
            }
            .to_string(),
            "invalid character '\\u{e9}' at position 0 (only digits, spaces, hyphens, underscores and periods allowed)"
        );
    }

    #[test]
    fn test_error_to_code() {
        assert_eq!(ResultCode::from(FormatError::Empty), ResultCode::NumberEmpty);
        assert_eq!(
            ResultCode::from(FormatError::NoDigits),
            ResultCode::InvalidFormat
        );
        assert_eq!(
            ResultCode::from(FormatError::InvalidCharacter {
                position: 1,
                character: 'A'
            }),
            ResultCode::InvalidFormat
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormatError>();
    }
}
