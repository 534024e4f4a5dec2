//! Spiral matrix generation.
//!
//! ## Purpose
//!
//! Build a square matrix filled with 1, 2, 3, ... walking clockwise in
//! concentric rings from the outside in.
//!
//! ## Key concepts
//!
//! * **Ring boundaries**: four indices (`top`, `bottom`, `left`,
//!   `right`) frame the unfilled region. Each pass fills the top row
//!   left to right, the right column top to bottom, the bottom row
//!   right to left, and the left column bottom to top, shrinking the
//!   matching boundary after each side.
//! * **Termination**: the fill is done once a boundary pair crosses.
//!   With unsigned indices the crossing must be caught before the
//!   decrement that would underflow, so the loop checks exhaustion
//!   right after each side that shrinks a boundary toward zero.
//!
//! ## Invariants
//!
//! * The unfilled region is always square: both boundary pairs shrink
//!   together, one side per pass, so neither pair can cross while the
//!   other still spans more than one line. The single-row and
//!   single-column checks inside the loop handle the final 1×1 cell.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Generation
// ============================================================================

/// Builds a `size`-by-`size` matrix filled clockwise with ascending
/// integers starting at 1.
///
/// Size 0 yields an empty matrix; size 1 yields `[[1]]`.
///
/// # Example
///
/// ```rust
/// use algokata::matrix::spiral::spiral_matrix;
///
/// assert_eq!(
///     spiral_matrix(3),
///     vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]],
/// );
/// ```
pub fn spiral_matrix(size: usize) -> Vec<Vec<u32>> {
    let mut grid = vec![vec![0u32; size]; size];
    if size == 0 {
        return grid;
    }

    let mut top = 0usize;
    let mut bottom = size - 1;
    let mut left = 0usize;
    let mut right = size - 1;
    let mut value = 1u32;

    loop {
        // Top row, left to right.
        for col in left..=right {
            grid[top][col] = value;
            value += 1;
        }
        top += 1;
        if top > bottom {
            break;
        }

        // Right column, top to bottom.
        for row in top..=bottom {
            grid[row][right] = value;
            value += 1;
        }
        if right == left {
            break;
        }
        right -= 1;

        // Bottom row, right to left.
        for col in (left..=right).rev() {
            grid[bottom][col] = value;
            value += 1;
        }
        bottom -= 1;

        // Left column, bottom to top.
        for row in (top..=bottom).rev() {
            grid[row][left] = value;
            value += 1;
        }
        left += 1;
        if left > right {
            break;
        }
    }

    grid
}
