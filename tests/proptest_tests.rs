//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use luhn_validator::{check_digit, is_valid, luhn, validate, ResultCode, VALID_RESULT};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), range)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a digit string that passes the Luhn check.
fn luhn_valid_string() -> impl Strategy<Value = String> {
    digit_string(1..=24).prop_map(|partial| {
        let digits: Vec<u8> = partial.bytes().map(|b| b - b'0').collect();
        let check = luhn::generate_check_digit(&digits);
        format!("{}{}", partial, check)
    })
}

/// Interleaves separators (spaces, hyphens, underscores, periods) into a
/// number.
fn with_separators(number: String) -> impl Strategy<Value = String> {
    let len = number.chars().count();
    proptest::collection::vec(
        prop_oneof![
            Just(""),
            Just(" "),
            Just("-"),
            Just("_"),
            Just("."),
            Just(" - "),
            Just("._"),
        ],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in number.chars().enumerate() {
            result.push_str(seps[i]);
            result.push(c);
        }
        result.push_str(seps[len]);
        result
    })
}

/// Zero code points of several decimal digit scripts.
fn script_zero() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(0x0030u32),
        Just(0x0660),
        Just(0x06F0),
        Just(0x0966),
        Just(0x0F20),
        Just(0x1040),
        Just(0xFF10),
        Just(0x1D7CE),
    ]
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Property: Adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(number in luhn_valid_string()) {
        prop_assert_eq!(validate(&number), VALID_RESULT);
    }

    /// Property: Changing any single digit invalidates the checksum.
    #[test]
    fn single_digit_change_invalidates(
        number in luhn_valid_string(),
        pos_seed in any::<prop::sample::Index>(),
        delta in 1u8..=9u8,
    ) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        let pos = pos_seed.index(digits.len());
        digits[pos] = (digits[pos] + delta) % 10;
        prop_assert!(!luhn::validate(&digits));
    }

    /// Property: Leading zeros never change the outcome.
    #[test]
    fn leading_zeros_preserve_outcome(number in digit_string(1..=20), zeros in 0usize..5) {
        let padded = format!("{}{}", "0".repeat(zeros), number);
        prop_assert_eq!(validate(&padded), validate(&number));
    }

    /// Property: check_digit agrees with the digit that validate accepts.
    #[test]
    fn check_digit_is_unique(partial in digit_string(1..=20)) {
        let expected = check_digit(&partial).unwrap();
        for d in 0u8..=9 {
            let full = format!("{}{}", partial, d);
            prop_assert_eq!(is_valid(&full), d == expected);
        }
    }
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: Validation is deterministic.
    #[test]
    fn validate_is_deterministic(input in ".*") {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    /// Property: validate() never panics and the result is self-consistent.
    #[test]
    fn validate_never_panics(input in ".*") {
        let result = validate(&input);
        prop_assert_eq!(result.succeeded(), result.code() == ResultCode::Valid);
        prop_assert_eq!(result.message(), result.code().message());
    }

    /// Property: is_valid agrees with validate.
    #[test]
    fn is_valid_consistent_with_validate(input in ".*") {
        prop_assert_eq!(is_valid(&input), validate(&input).succeeded());
    }

    /// Property: Separators do not affect the outcome.
    #[test]
    fn separators_dont_affect_validation(
        separated in digit_string(1..=20).prop_flat_map(|n| (Just(n.clone()), with_separators(n)))
    ) {
        let (plain, decorated) = separated;
        prop_assert_eq!(validate(&decorated), validate(&plain));
    }

    /// Property: Whitespace-only input is always NUMBER_EMPTY.
    #[test]
    fn whitespace_is_empty(input in "[ \t\r\n]{0,10}") {
        prop_assert_eq!(validate(&input).code(), ResultCode::NumberEmpty);
    }

    /// Property: Any ASCII letter makes the input non-numeric.
    #[test]
    fn letters_are_invalid_format(
        number in digit_string(0..=10),
        letter in prop::char::range('a', 'z'),
        suffix in digit_string(0..=10),
    ) {
        let input = format!("{}{}{}", number, letter, suffix);
        prop_assert_eq!(validate(&input).code(), ResultCode::InvalidFormat);
    }

    /// Property: Re-encoding digits into another script preserves the outcome.
    #[test]
    fn digit_script_equivalence(number in digit_string(1..=20), zero in script_zero()) {
        let converted: String = number
            .chars()
            .map(|c| char::from_u32(zero + c.to_digit(10).unwrap()).unwrap())
            .collect();
        prop_assert_eq!(validate(&converted), validate(&number));
    }
}
