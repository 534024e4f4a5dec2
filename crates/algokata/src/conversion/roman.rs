//! Roman numeral encoding.
//!
//! ## Purpose
//!
//! Render a small decimal number in Roman notation by greedy subtraction
//! against the descending numeral table.
//!
//! ## Key concepts
//!
//! * **Greedy subtraction**: repeatedly emit the largest table symbol
//!   whose value still fits, subtracting as it goes. Because the table
//!   lists the subtractive pairs (`IX`, `IV`) as entries of their own,
//!   the greedy walk produces canonical notation directly.
//!
//! ## Non-goals
//!
//! * Numbers of 40 and above. The table stops at `X`, which bounds the
//!   canonical output range to 1..=39; larger inputs emit a long run of
//!   `X`s rather than `XL`/`L` notation.

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::primitives::tables::ROMAN_NUMERALS;

// ============================================================================
// Encoding
// ============================================================================

/// Converts `num` to its Roman numeral representation.
///
/// The supported domain is 1..=39. Zero produces the empty string;
/// inputs of 40 and above produce uncanonical repeated-`X` notation.
///
/// # Example
///
/// ```rust
/// use algokata::conversion::roman::to_roman_numerals;
///
/// assert_eq!(to_roman_numerals(1), "I");
/// assert_eq!(to_roman_numerals(9), "IX");
/// assert_eq!(to_roman_numerals(26), "XXVI");
/// assert_eq!(to_roman_numerals(39), "XXXIX");
/// ```
pub fn to_roman_numerals(num: u32) -> String {
    let mut remaining = num;
    let mut out = String::new();
    for numeral in &ROMAN_NUMERALS {
        while remaining >= numeral.value {
            out.push_str(numeral.symbol);
            remaining -= numeral.value;
        }
    }
    out
}
