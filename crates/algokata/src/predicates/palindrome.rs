//! Palindrome predicate.
//!
//! ## Purpose
//!
//! Decide whether a string reads the same forwards and backwards, by
//! exact character comparison. Case, whitespace, and punctuation all
//! count; `"Abcba"` is not a palindrome here.
//!
//! ## Design notes
//!
//! * The check walks a `Chars` iterator from both ends at once, so it
//!   compares Unicode scalar values rather than bytes and allocates
//!   nothing. Multi-byte characters compare as single units.
//! * The walk stops at the middle: odd-length strings leave one
//!   uncompared center character, which cannot break symmetry.

// ============================================================================
// Palindrome check
// ============================================================================

/// Returns `true` when `string` is an exact palindrome.
///
/// The empty string and single characters are palindromes trivially.
///
/// # Example
///
/// ```rust
/// use algokata::predicates::palindrome::is_palindrome;
///
/// assert!(is_palindrome("abcba"));
/// assert!(is_palindrome(""));
/// assert!(!is_palindrome("qweqwe"));
/// assert!(!is_palindrome("a ba")); // whitespace counts
/// ```
pub fn is_palindrome(string: &str) -> bool {
    let mut chars = string.chars();
    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) if front != back => return false,
            (Some(_), Some(_)) => {}
            // Ends met: either exhausted, or one center character left.
            _ => return true,
        }
    }
}
