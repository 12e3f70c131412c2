//! Fuzz target for validation.
//!
//! validate() must never panic and must agree with the lower-level helpers.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_validator::{check_digit, is_valid, normalize, validate, ResultCode};

fuzz_target!(|data: &str| {
    let result = validate(data);
    assert_eq!(result.succeeded(), result.code() == ResultCode::Valid);
    assert_eq!(is_valid(data), result.succeeded());

    match normalize::parse_digits(data) {
        Ok(_) => {
            assert!(matches!(
                result.code(),
                ResultCode::Valid | ResultCode::NumberFailedValidation
            ));
            let digit = check_digit(data).unwrap();
            assert!(digit <= 9);
        }
        Err(err) => assert_eq!(result.code(), ResultCode::from(err)),
    }
});
