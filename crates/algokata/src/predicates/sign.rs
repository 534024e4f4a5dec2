//! Sign predicate.

use num_traits::Zero;

// ============================================================================
// Sign check
// ============================================================================

/// Returns `true` when `number` is positive or zero.
///
/// Zero counts as positive. The check is generic over any ordered numeric
/// type; for floats, `NaN` compares as neither side and yields `false`.
///
/// # Example
///
/// ```rust
/// use algokata::predicates::sign::is_positive;
///
/// assert!(is_positive(1));
/// assert!(is_positive(0));
/// assert!(!is_positive(-1));
/// assert!(is_positive(0.0_f64));
/// ```
#[inline]
pub fn is_positive<T: Zero + PartialOrd>(number: T) -> bool {
    number >= T::zero()
}
