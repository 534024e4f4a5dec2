//! Isosceles triangle predicate.
//!
//! ## Purpose
//!
//! Decide whether three side lengths form a non-degenerate isosceles
//! triangle: a valid triangle with at least two equal sides.
//!
//! ## Key concepts
//!
//! * **Triangle inequality**: each side must be strictly shorter than
//!   the sum of the other two. Checking all three orientations also
//!   rejects zero and negative sides, because with a non-positive side
//!   at least one inequality fails.
//! * **Degenerate triangles**: sides like (1, 2, 3) satisfy `a + b == c`
//!   and collapse to a line segment; the strict inequality excludes them.

use num_traits::Num;

// ============================================================================
// Isosceles check
// ============================================================================

/// Returns `true` when sides `a`, `b`, `c` form a valid isosceles
/// triangle.
///
/// Equilateral triangles qualify (three equal sides imply two). Inputs
/// that violate the triangle inequality, including zero or negative
/// sides, return `false` regardless of equality between them.
///
/// # Example
///
/// ```rust
/// use algokata::predicates::triangle::is_isosceles_triangle;
///
/// assert!(is_isosceles_triangle(2, 3, 2));
/// assert!(is_isosceles_triangle(3, 3, 3));
/// assert!(!is_isosceles_triangle(2, 3, 5)); // degenerate
/// assert!(!is_isosceles_triangle(3, 4, 5)); // scalene
/// ```
#[inline]
pub fn is_isosceles_triangle<T: Num + PartialOrd + Copy>(a: T, b: T, c: T) -> bool {
    if a + b <= c || b + c <= a || a + c <= b {
        return false;
    }
    a == b || b == c || a == c
}
