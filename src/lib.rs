//! # luhn_validator
//!
//! Luhn checksum validation for payment card and identification numbers.
//!
//! ## Features
//!
//! - Luhn algorithm validation with a closed set of outcome codes
//! - Spaces, hyphens, underscores and periods accepted as separators
//! - Decimal digits from any Unicode script (Arabic-Indic, Tibetan, ...)
//! - Check digit generation
//! - Batch and streaming validation
//!
//! ## Quick Start
//!
//! ```rust
//! use luhn_validator::{validate, validate_optional, ResultCode, VALID_RESULT};
//!
//! // Separators are ignored
//! assert_eq!(validate("4992-7398-716"), VALID_RESULT);
//!
//! // Every failure is a value, never a panic
//! let result = validate("12378");
//! assert!(!result.succeeded());
//! assert_eq!(result.code(), ResultCode::NumberFailedValidation);
//! assert_eq!(result.message(), "Invalid: card number failed validation");
//!
//! // Absent input
//! assert_eq!(validate_optional(None).code(), ResultCode::NumberEmpty);
//! ```
//!
//! ## Outcomes
//!
//! | Code | Succeeded | Message |
//! |------|-----------|---------|
//! | `NUMBER_EMPTY` | false | Invalid: card number cannot be null, empty or blank |
//! | `INVALID_FORMAT` | false | Invalid: card number must be numeric |
//! | `NUMBER_FAILED_VALIDATION` | false | Invalid: card number failed validation |
//! | `VALID` | true | Valid |
//!
//! ## Check Digits
//!
//! ```rust
//! use luhn_validator::{check_digit, is_valid};
//!
//! assert_eq!(check_digit("237").unwrap(), 8);
//! assert!(is_valid("2378"));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use luhn_validator::batch;
//!
//! let numbers = ["2378", "12378", "4992 7398 716"];
//! let (valid, invalid) = batch::count_valid(&numbers);
//! assert_eq!((valid, invalid), (2, 1));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Rayon-based batch validation |
//! | `serde` | Serialization of results and codes |
//!
//! ## Security
//!
//! - Decoded digits are zeroized when dropped
//! - Debug events mask all but the last four digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod digits;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod result;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use error::FormatError;
pub use result::{ResultCode, ValidationResult, VALID_RESULT};
pub use validate::{check_digit, is_valid, validate, validate_optional};
