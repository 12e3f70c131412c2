//! Fuzz target for the Luhn primitives.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn_validator::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let valid = luhn::validate(&digits);
    if !digits.is_empty() {
        assert_eq!(valid, luhn::compute_checksum(&digits) % 10 == 0);
    }

    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");

    // Adding check digit should make it valid
    let mut with_check = digits;
    with_check.push(check);
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");
});
