//! Next permutation over decimal digits.
//!
//! ## Purpose
//!
//! Find the smallest number greater than the input that uses exactly
//! the same decimal digits.
//!
//! ## Key concepts
//!
//! * **Pivot**: scanning right to left, the first digit smaller than
//!   its right neighbor. Everything right of the pivot is a
//!   non-increasing suffix, already the largest arrangement of those
//!   digits; the pivot is the rightmost digit that can still grow.
//! * **Successor**: the smallest suffix digit strictly greater than the
//!   pivot. Because the suffix is non-increasing, that is the rightmost
//!   suffix digit exceeding the pivot.
//! * **Suffix reset**: after swapping pivot and successor the suffix is
//!   still non-increasing, so reversing it yields the smallest
//!   arrangement, completing the minimal step upward.
//!
//! ## Invariants
//!
//! * No pivot means the digits are non-increasing throughout; the input
//!   is the largest arrangement of its digits and is returned unchanged.
//! * The result always has the same digit multiset and the same number
//!   of digits as the input.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Next bigger number
// ============================================================================

/// Returns the smallest number greater than `number` composed of the
/// same decimal digits, or `number` itself when no such rearrangement
/// exists.
///
/// # Example
///
/// ```rust
/// use algokata::sequence::permutation::next_bigger_number;
///
/// assert_eq!(next_bigger_number(12345), 12354);
/// assert_eq!(next_bigger_number(321321), 322113);
/// assert_eq!(next_bigger_number(90822), 92028);
/// assert_eq!(next_bigger_number(54321), 54321);
/// ```
pub fn next_bigger_number(number: u64) -> u64 {
    let mut digits = split_digits(number);

    let Some(pivot) = find_pivot(&digits) else {
        return number;
    };

    let successor = find_successor(&digits, pivot);
    digits.swap(pivot, successor);

    // The suffix stays non-increasing after the swap; reversing it is
    // the ascending sort.
    digits[pivot + 1..].reverse();

    join_digits(&digits)
}

// ============================================================================
// Digit helpers
// ============================================================================

/// Splits `number` into decimal digits, most significant first.
fn split_digits(number: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut remaining = number;
    loop {
        digits.push((remaining % 10) as u8);
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Reassembles digits (most significant first) into a number.
fn join_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &digit| acc * 10 + u64::from(digit))
}

/// Finds the rightmost index whose digit is smaller than its right
/// neighbor, or `None` when the digits are non-increasing throughout.
fn find_pivot(digits: &[u8]) -> Option<usize> {
    digits.windows(2).rposition(|pair| pair[0] < pair[1])
}

/// Finds the rightmost suffix index whose digit exceeds the pivot's.
///
/// The caller guarantees at least one such digit exists: the pivot's
/// immediate right neighbor already exceeds it.
fn find_successor(digits: &[u8], pivot: usize) -> usize {
    let mut successor = pivot + 1;
    for i in (pivot + 1..digits.len()).rev() {
        if digits[i] > digits[pivot] {
            successor = i;
            break;
        }
    }
    successor
}
