//! Tests for the in-place matrix rotation.
//!
//! These tests verify the clockwise quarter turn:
//! - Exact results for small even and odd sizes
//! - The rotate-four-times identity law
//! - Agreement with an allocating reference rotation
//! - In-place operation on non-Copy element types
//!
//! ## Test Organization
//!
//! 1. **Exact Results** - Sizes 1 through 4
//! 2. **Laws** - Quadruple rotation identity, reference agreement
//! 3. **Element Types** - Non-Copy elements move without cloning

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algokata::matrix::rotation::rotate_clockwise;
use algokata::matrix::spiral::spiral_matrix;

/// Reference rotation that allocates a new matrix.
fn rotated_copy(matrix: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let n = matrix.len();
    let mut out = vec![vec![0; n]; n];
    for (i, row) in matrix.iter().enumerate() {
        for (k, &value) in row.iter().enumerate() {
            out[k][n - 1 - i] = value;
        }
    }
    out
}

// ============================================================================
// Exact Result Tests
// ============================================================================

/// Test the trivial sizes.
#[test]
fn test_rotate_trivial_sizes() {
    let mut empty: Vec<Vec<i32>> = Vec::new();
    rotate_clockwise(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![vec![42]];
    rotate_clockwise(&mut single);
    assert_eq!(single, vec![vec![42]]);

    let mut two = vec![vec![1, 2], vec![3, 4]];
    rotate_clockwise(&mut two);
    assert_eq!(two, vec![vec![3, 1], vec![4, 2]]);
}

/// Test the classic size-3 rotation.
#[test]
fn test_rotate_size_three() {
    let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    rotate_clockwise(&mut m);
    assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
}

/// Test an even size, where no center cell stays fixed.
#[test]
fn test_rotate_size_four() {
    let mut m = vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ];
    rotate_clockwise(&mut m);
    assert_eq!(
        m,
        vec![
            vec![13, 9, 5, 1],
            vec![14, 10, 6, 2],
            vec![15, 11, 7, 3],
            vec![16, 12, 8, 4],
        ],
    );
}

// ============================================================================
// Law Tests
// ============================================================================

/// Test that four rotations restore the original matrix.
#[test]
fn test_rotate_four_times_is_identity() {
    for size in 0..=8 {
        let original = spiral_matrix(size);
        let mut m = original.clone();
        for _ in 0..4 {
            rotate_clockwise(&mut m);
        }
        assert_eq!(m, original, "quadruple rotation at size {}", size);
    }
}

/// Test agreement with the allocating reference rotation on random
/// matrices.
#[test]
fn test_rotate_matches_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let n = rng.gen_range(1..10);
        let m: Vec<Vec<i64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(-100..100)).collect())
            .collect();

        let expected = rotated_copy(&m);
        let mut actual = m.clone();
        rotate_clockwise(&mut actual);
        assert_eq!(actual, expected, "rotation mismatch for {:?}", m);
    }
}

// ============================================================================
// Element Type Tests
// ============================================================================

/// Test rotation of non-Copy elements.
///
/// The swap scheme must move values without requiring Clone or Copy.
#[test]
fn test_rotate_non_copy_elements() {
    let mut m = vec![
        vec![String::from("a"), String::from("b")],
        vec![String::from("c"), String::from("d")],
    ];
    rotate_clockwise(&mut m);
    assert_eq!(
        m,
        vec![
            vec![String::from("c"), String::from("a")],
            vec![String::from("d"), String::from("b")],
        ],
    );
}
