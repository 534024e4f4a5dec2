//! Board coordinates.
//!
//! ## Purpose
//!
//! Provide the coordinate pair used by the board-geometry predicates.
//! A `Position` is a plain value type: two `i32` axes, no invariants
//! enforced at construction.
//!
//! ## Design notes
//!
//! * Signed axes. The chess predicate walks diagonal rays by offsetting
//!   both axes, and signed arithmetic keeps those offsets symmetric
//!   around any square without underflow concerns.
//! * `Copy` semantics. A position is 8 bytes; passing it by value is
//!   cheaper and reads better than borrowing it.

// ============================================================================
// Position
// ============================================================================

/// A coordinate pair on a square board.
///
/// `x` is the column (file) and `y` the row (rank). The type places no
/// bounds on either axis; the predicates that consume it define the board
/// they operate on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a position from column and row coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
