//! In-place matrix rotation.
//!
//! ## Purpose
//!
//! Rotate a square matrix 90 degrees clockwise without allocating a
//! second matrix. Large inputs are the point: the caller's rows are
//! permuted in place through an exclusive borrow.
//!
//! ## Key concepts
//!
//! * **Transpose then reverse**: reflecting across the main diagonal and
//!   then reversing each row composes to a clockwise quarter turn. Both
//!   phases are element swaps, so the whole transform is allocation-free
//!   and works for any element type, `Copy` or not.
//! * **Disjoint row borrows**: the transpose swaps `matrix[i][k]` with
//!   `matrix[k][i]` for `k > i`. Those cells live in different rows, and
//!   `split_at_mut` at row `i + 1` proves the disjointness to the
//!   borrow checker without `unsafe` or index juggling.
//!
//! ## Invariants
//!
//! * Only cell pairs with `k > i` are swapped in phase one; touching a
//!   pair twice would undo the transpose.
//! * The matrix is expected square. Debug builds assert it; otherwise
//!   ragged input panics on an out-of-bounds row index rather than
//!   silently corrupting.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::mem;

// ============================================================================
// Rotation
// ============================================================================

/// Rotates a square matrix 90 degrees clockwise in place.
///
/// The caller's rows are mutated directly; no second matrix is
/// allocated. A 1×1 or empty matrix is left unchanged. Applying the
/// rotation four times restores the original matrix.
///
/// # Example
///
/// ```rust
/// use algokata::matrix::rotation::rotate_clockwise;
///
/// let mut m = vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
///     vec![7, 8, 9],
/// ];
/// rotate_clockwise(&mut m);
/// assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
/// ```
pub fn rotate_clockwise<T>(matrix: &mut [Vec<T>]) {
    let n = matrix.len();
    debug_assert!(
        matrix.iter().all(|row| row.len() == n),
        "Matrix must be square"
    );

    // Phase 1: transpose across the main diagonal.
    for i in 0..n {
        let (upper, lower) = matrix.split_at_mut(i + 1);
        let row_i = &mut upper[i];
        for (offset, row_k) in lower.iter_mut().enumerate() {
            let k = i + 1 + offset;
            mem::swap(&mut row_i[k], &mut row_k[i]);
        }
    }

    // Phase 2: reverse each row.
    for row in matrix.iter_mut() {
        row.reverse();
    }
}
