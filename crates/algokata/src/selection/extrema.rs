//! Extrema over fixed-arity arguments.

// ============================================================================
// Maximum of three
// ============================================================================

/// Returns the largest of three values by pairwise comparison.
///
/// Ties return the earlier argument. Only `PartialOrd` is required, so
/// float arguments work; an unordered comparison (`NaN` on either side)
/// falls through to the later argument.
///
/// # Example
///
/// ```rust
/// use algokata::selection::extrema::max_of_three;
///
/// assert_eq!(max_of_three(1, 2, 3), 3);
/// assert_eq!(max_of_three(-5, -8, -7), -5);
/// assert_eq!(max_of_three(0.5, 0.1, -10.0), 0.5);
/// ```
#[inline]
pub fn max_of_three<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let larger = if a >= b { a } else { b };
    if larger >= c {
        larger
    } else {
        c
    }
}
