//! Masking of decoded numbers for diagnostics.
//!
//! Validation emits `tracing` events; those events must never carry a full
//! card number. Only the last four digits are rendered, grouped in fours.

/// Number of trailing digits left visible.
pub const VISIBLE_DIGITS: usize = 4;

/// Masks a decoded digit sequence, leaving only the last four digits.
///
/// Format: `****-****-****-1234`. Sequences of four digits or fewer are
/// masked completely.
///
/// # Panics
///
/// Panics in debug builds if a visible element is greater than 9.
///
/// # Example
///
/// ```
/// use luhn_validator::mask::mask_digits;
///
/// assert_eq!(mask_digits(&[4, 9, 9, 2, 7, 3, 9, 8, 7, 1, 6]), "****-***8-716");
/// assert_eq!(mask_digits(&[2, 3, 7, 8]), "****");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();
    if len <= VISIBLE_DIGITS {
        return "*".repeat(len);
    }

    let masked_count = len - VISIBLE_DIGITS;
    let mut result = String::with_capacity(len + len / 4);

    for (i, &digit) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        if i < masked_count {
            result.push('*');
        } else {
            debug_assert!(digit < 10, "digit value {} out of range", digit);
            result.push(char::from(b'0' + digit));
        }
    }

    result
}
