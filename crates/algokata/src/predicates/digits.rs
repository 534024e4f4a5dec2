//! Digit membership predicate.
//!
//! ## Design notes
//!
//! * The check peels decimal digits off the number arithmetically
//!   instead of formatting it, so it allocates nothing and works under
//!   `no_std` without `alloc`.
//! * Negative numbers are checked by magnitude; the sign carries no
//!   digits. `unsigned_abs` avoids the overflow `abs` would hit on
//!   `i64::MIN`.

// ============================================================================
// Digit membership
// ============================================================================

/// Returns `true` when the decimal representation of `num` contains
/// `digit`.
///
/// `digit` is expected in 0..=9; values outside that range match no
/// number. Zero has the single digit 0.
///
/// # Example
///
/// ```rust
/// use algokata::predicates::digits::contains_digit;
///
/// assert!(contains_digit(123450, 5));
/// assert!(!contains_digit(123450, 6));
/// assert!(contains_digit(-12, 1));
/// assert!(contains_digit(0, 0));
/// ```
pub fn contains_digit(num: i64, digit: u32) -> bool {
    if digit > 9 {
        return false;
    }
    let target = u64::from(digit);
    let mut remaining = num.unsigned_abs();
    // Check at least once so 0 still yields its digit.
    loop {
        if remaining % 10 == target {
            return true;
        }
        remaining /= 10;
        if remaining == 0 {
            return false;
        }
    }
}
