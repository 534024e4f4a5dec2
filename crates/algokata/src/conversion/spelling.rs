//! Spelling out decimal strings.
//!
//! ## Purpose
//!
//! Turn the text of a decimal number into English words, one word per
//! character, using the fixed digit-word table.

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::primitives::tables::digit_word;

// ============================================================================
// Spelling
// ============================================================================

/// Spells out each character of `number_str` as a word, separated by
/// single spaces.
///
/// Digits, the signs `-`/`+`, and the separators `.`/`,` each contribute
/// a word; any other character contributes nothing. The result carries
/// no leading or trailing space.
///
/// # Example
///
/// ```rust
/// use algokata::conversion::spelling::spell_out_number;
///
/// assert_eq!(spell_out_number("10.5"), "one zero point five");
/// assert_eq!(spell_out_number("-10"), "minus one zero");
/// assert_eq!(spell_out_number("1950.2"), "one nine five zero point two");
/// ```
pub fn spell_out_number(number_str: &str) -> String {
    let mut out = String::new();
    for c in number_str.chars() {
        if let Some(word) = digit_word(c) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}
