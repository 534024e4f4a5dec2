//! Tests for the public prelude.
//!
//! Verifies that a single glob import exposes the whole catalog and
//! that every routine is callable through it.

use algokata::prelude::*;

/// Exercise each re-exported routine once through the prelude.
#[test]
fn test_prelude_exposes_catalog() {
    // Predicates
    assert!(is_positive(3));
    assert!(is_isosceles_triangle(4, 4, 6));
    assert!(can_queen_capture_king(Position::new(0, 0), Position::new(3, 3)));
    assert!(is_palindrome("level"));
    assert!(contains_digit(404, 4));

    // Selection
    assert_eq!(max_of_three(2, 9, 4), 9);
    assert_eq!(index_of("kata", '+'), -1);
    assert_eq!(balance_index(&[1, 2, 5, 3, 0]), 2);

    // Conversion
    assert_eq!(to_roman_numerals(14), "XIV");
    assert_eq!(spell_out_number("3.5"), "three point five");

    // Matrix
    let mut grid = spiral_matrix(2);
    assert_eq!(grid, vec![vec![1, 2], vec![4, 3]]);
    rotate_clockwise(&mut grid);
    assert_eq!(grid, vec![vec![4, 1], vec![3, 2]]);

    // Sequence
    let mut xs = vec![2, 1];
    sort_ascending(&mut xs);
    assert_eq!(xs, vec![1, 2]);
    assert_eq!(shuffle_chars("abcd", 1), "acbd");
    assert_eq!(next_bigger_number(102), 120);
}
