//! Unicode decimal digit decoding.
//!
//! `char::to_digit` only understands ASCII. Card numbers may arrive in any
//! script's decimal digits (Arabic-Indic, Devanagari, Tibetan, full-width,
//! ...), so this module maps every character of general category `Nd` to
//! its value.
//!
//! Unicode guarantees that `Nd` characters come in runs of ten contiguous
//! code points ordered 0 through 9. Storing the code point of each run's
//! zero is therefore enough: a character is a decimal digit exactly when it
//! lies within ten code points above some zero.

/// First code point ("digit zero") of every `Nd` run, sorted ascending.
/// Unicode 15.0.
const DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Returns the decimal value (0-9) of `c` if it is a decimal digit in any
/// script, `None` otherwise.
///
/// Numeric characters without a positional decimal value, such as
/// superscripts, circled numbers, Roman numerals or vulgar fractions, are
/// not decimal digits.
///
/// # Example
///
/// ```
/// use luhn_validator::digits::decimal_value;
///
/// assert_eq!(decimal_value('7'), Some(7));
/// assert_eq!(decimal_value('\u{0667}'), Some(7)); // ARABIC-INDIC DIGIT SEVEN
/// assert_eq!(decimal_value('\u{0F27}'), Some(7)); // TIBETAN DIGIT SEVEN
/// assert_eq!(decimal_value('\u{00B2}'), None); // SUPERSCRIPT TWO
/// assert_eq!(decimal_value('x'), None);
/// ```
#[inline]
pub fn decimal_value(c: char) -> Option<u8> {
    if c.is_ascii() {
        return c.to_digit(10).map(|d| d as u8);
    }

    let cp = c as u32;
    let zero = match DIGIT_ZEROS.binary_search(&cp) {
        Ok(idx) => DIGIT_ZEROS[idx],
        Err(0) => return None,
        Err(idx) => DIGIT_ZEROS[idx - 1],
    };

    let offset = cp - zero;
    if offset < 10 {
        Some(offset as u8)
    } else {
        None
    }
}
