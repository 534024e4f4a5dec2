//! Constant lookup tables for numeral conversion.
//!
//! ## Purpose
//!
//! Hold the value/symbol pairs the conversion layer walks. Keeping the
//! tables here, separate from the conversion loops, makes the data easy
//! to audit against the written systems they encode.
//!
//! ## Key concepts
//!
//! * **Subtractive pairs**: Roman notation writes 4 as `IV` and 9 as `IX`
//!   rather than `IIII`/`VIIII`. Listing those pairs as first-class table
//!   entries lets a greedy descending scan emit them without special
//!   cases in the conversion loop.
//! * **Descending order**: the greedy scan is only correct because the
//!   table is sorted by strictly descending value.

// ============================================================================
// Roman numerals
// ============================================================================

/// A single value/symbol pair of the Roman numeral system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RomanNumeral {
    /// Decimal value of the symbol.
    pub value: u32,
    /// Written form of the symbol.
    pub symbol: &'static str,
}

/// Roman numeral table in descending value order, subtractive pairs
/// included.
///
/// Covers the symbols needed for 1..=39, the supported conversion range.
pub const ROMAN_NUMERALS: [RomanNumeral; 5] = [
    RomanNumeral { value: 10, symbol: "X" },
    RomanNumeral { value: 9, symbol: "IX" },
    RomanNumeral { value: 5, symbol: "V" },
    RomanNumeral { value: 4, symbol: "IV" },
    RomanNumeral { value: 1, symbol: "I" },
];

// ============================================================================
// Digit words
// ============================================================================

/// Returns the English word for one character of a decimal number string.
///
/// Covers the ten digits, the signs `-` and `+`, and the separators `.`
/// and `,` (both read as "point"). Any other character maps to `None`.
#[inline]
pub const fn digit_word(c: char) -> Option<&'static str> {
    match c {
        '0' => Some("zero"),
        '1' => Some("one"),
        '2' => Some("two"),
        '3' => Some("three"),
        '4' => Some("four"),
        '5' => Some("five"),
        '6' => Some("six"),
        '7' => Some("seven"),
        '8' => Some("eight"),
        '9' => Some("nine"),
        '-' => Some("minus"),
        '+' => Some("plus"),
        '.' | ',' => Some("point"),
        _ => None,
    }
}
