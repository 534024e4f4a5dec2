//! In-place ascending sort.
//!
//! ## Design notes
//!
//! * Insertion sort, chosen for its in-place adjacent-swap structure:
//!   no scratch buffer, stable, and linear on already-sorted input.
//!   The quadratic worst case is acceptable at the slice sizes this
//!   catalog targets.
//! * `PartialOrd` rather than `Ord` keeps float slices sortable; an
//!   unordered comparison (`NaN`) simply never swaps, leaving such
//!   elements where the scan finds them.

// ============================================================================
// Insertion sort
// ============================================================================

/// Sorts `arr` in ascending order, in place.
///
/// Stable: equal elements keep their relative order. The slice is
/// mutated directly through the exclusive borrow; callers needing the
/// original must copy first.
///
/// # Example
///
/// ```rust
/// use algokata::sequence::sorting::sort_ascending;
///
/// let mut xs = vec![-2, 9, 5, -3];
/// sort_ascending(&mut xs);
/// assert_eq!(xs, vec![-3, -2, 5, 9]);
/// ```
pub fn sort_ascending<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j] < arr[j - 1] {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
}
