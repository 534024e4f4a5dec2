//! Linear search over strings and slices.
//!
//! ## Purpose
//!
//! Locate positions of interest by a single left-to-right scan: the
//! first occurrence of a character, or the fulcrum index that balances
//! the sums on either side of it.
//!
//! ## Design notes
//!
//! * Both searches return `-1` for "not found" instead of an `Option`.
//!   The sentinel keeps the return type numeric, which is what callers
//!   comparing against expected index tables want.
//! * `balance_index` keeps a running left sum against the precomputed
//!   total, so each candidate costs O(1) instead of re-summing both
//!   sides. The first qualifying index wins.
//!
//! ## Invariants
//!
//! * `index_of` counts characters, not bytes; the returned index is a
//!   `chars()` offset.
//! * `balance_index` never considers index 0 (it has no left side), but
//!   does consider the last index, whose right side sums to zero.

use num_traits::PrimInt;

// ============================================================================
// Character search
// ============================================================================

/// Returns the index of the first occurrence of `letter` in `string`,
/// or `-1` when absent.
///
/// Matching is case-sensitive and exact. Indices count characters from
/// zero.
///
/// # Example
///
/// ```rust
/// use algokata::selection::search::index_of;
///
/// assert_eq!(index_of("qwerty", 'q'), 0);
/// assert_eq!(index_of("qwerty", 'Q'), -1);
/// ```
pub fn index_of(string: &str, letter: char) -> isize {
    for (index, c) in string.chars().enumerate() {
        if c == letter {
            return index as isize;
        }
    }
    -1
}

// ============================================================================
// Balance index
// ============================================================================

/// Returns the first index whose strictly-left elements sum to the same
/// value as its strictly-right elements, or `-1` when no index balances.
///
/// The element at the returned index is the fulcrum; its own value is
/// excluded from both sums. Index 0 is never a candidate. The last index
/// is, with an empty (zero) right side.
///
/// # Example
///
/// ```rust
/// use algokata::selection::search::balance_index;
///
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), 2); // 1 + 2 == 3 + 0
/// assert_eq!(balance_index(&[2, 3, 9, 5]), 2); // 2 + 3 == 5
/// assert_eq!(balance_index(&[1, 2, 3, 4, 5]), -1);
/// ```
pub fn balance_index<T: PrimInt>(arr: &[T]) -> isize {
    let mut total = T::zero();
    for &value in arr {
        total = total + value;
    }

    let mut left = T::zero();
    for i in 1..arr.len() {
        left = left + arr[i - 1];
        let right = total - left - arr[i];
        if left == right {
            return i as isize;
        }
    }
    -1
}
