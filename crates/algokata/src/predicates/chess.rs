//! Queen capture predicate.
//!
//! ## Purpose
//!
//! Decide whether a queen attacks a king on an otherwise empty board:
//! same column, same row, or same diagonal.
//!
//! ## Design notes
//!
//! * The diagonal test walks the four diagonal rays outward from the
//!   queen square by square instead of comparing coordinate deltas. The
//!   walk stops after offset 9, which covers every diagonal a board of
//!   up to ten files can contain.
//! * The queen's own square counts as attacked; offset zero is the
//!   rank/file test, which a coinciding king passes.

use crate::primitives::position::Position;

// ============================================================================
// Queen capture
// ============================================================================

/// Returns `true` when a queen on `queen` attacks the square `king` on
/// an empty board.
///
/// # Example
///
/// ```rust
/// use algokata::predicates::chess::can_queen_capture_king;
/// use algokata::primitives::position::Position;
///
/// assert!(can_queen_capture_king(Position::new(0, 0), Position::new(0, 7)));
/// assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
/// assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 3)));
/// ```
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    if queen.x == king.x || queen.y == king.y {
        return true;
    }
    for offset in 1..10 {
        if queen.x + offset == king.x && queen.y + offset == king.y {
            return true;
        }
        if queen.x - offset == king.x && queen.y - offset == king.y {
            return true;
        }
        if queen.x + offset == king.x && queen.y - offset == king.y {
            return true;
        }
        if queen.x - offset == king.x && queen.y + offset == king.y {
            return true;
        }
    }
    false
}
