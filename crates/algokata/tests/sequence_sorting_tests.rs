//! Tests for the in-place ascending sort.
//!
//! These tests verify the insertion sort:
//! - Known orderings, duplicates, and presorted input
//! - The permutation and non-decreasing laws on random slices
//! - Stability for equal keys
//! - Float elements
//!
//! ## Test Organization
//!
//! 1. **Known Inputs** - Fixed slices, duplicates, reversals
//! 2. **Laws** - Sortedness and permutation on random input
//! 3. **Stability** - Equal keys keep their relative order
//! 4. **Floats** - Fractional elements sort by value

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algokata::sequence::sorting::sort_ascending;

// ============================================================================
// Known Input Tests
// ============================================================================

/// Test fixed slices with known results.
#[test]
fn test_sort_known_inputs() {
    let mut xs = vec![-2, 9, 5, -3];
    sort_ascending(&mut xs);
    assert_eq!(xs, vec![-3, -2, 5, 9]);

    let mut reversed = vec![5, 4, 3, 2, 1];
    sort_ascending(&mut reversed);
    assert_eq!(reversed, vec![1, 2, 3, 4, 5]);

    let mut with_dupes = vec![3, 1, 3, 1, 3];
    sort_ascending(&mut with_dupes);
    assert_eq!(with_dupes, vec![1, 1, 3, 3, 3]);
}

/// Test the degenerate slices: empty, single, presorted.
#[test]
fn test_sort_degenerate_inputs() {
    let mut empty: Vec<i32> = vec![];
    sort_ascending(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![7];
    sort_ascending(&mut single);
    assert_eq!(single, vec![7]);

    let mut sorted = vec![1, 2, 3, 4];
    sort_ascending(&mut sorted);
    assert_eq!(sorted, vec![1, 2, 3, 4]);
}

// ============================================================================
// Law Tests
// ============================================================================

/// Test sortedness and permutation on random slices.
///
/// The output must be non-decreasing and hold exactly the input's
/// elements.
#[test]
fn test_sort_laws_random() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let len = rng.gen_range(0..40);
        let original: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();

        let mut sorted = original.clone();
        sort_ascending(&mut sorted);

        for pair in sorted.windows(2) {
            assert!(pair[0] <= pair[1], "not sorted: {:?}", sorted);
        }

        let mut expected = original.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected, "not a permutation of {:?}", original);
    }
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that equal keys keep their relative order.
///
/// Sorting by key only must leave the payload order of equal keys
/// untouched.
#[test]
fn test_sort_is_stable() {
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    let mut xs = vec![
        Tagged { key: 2, tag: 'a' },
        Tagged { key: 1, tag: 'b' },
        Tagged { key: 2, tag: 'c' },
        Tagged { key: 1, tag: 'd' },
    ];
    sort_ascending(&mut xs);

    let order: Vec<(i32, char)> = xs.iter().map(|t| (t.key, t.tag)).collect();
    assert_eq!(
        order,
        vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')],
        "equal keys must keep insertion order"
    );
}

// ============================================================================
// Float Tests
// ============================================================================

/// Test sorting of float slices.
#[test]
fn test_sort_floats() {
    let mut xs = vec![0.3, -1.5, 2.25, 0.0];
    sort_ascending(&mut xs);

    let expected = [-1.5, 0.0, 0.3, 2.25];
    for (actual, want) in xs.iter().zip(expected.iter()) {
        assert_relative_eq!(*actual, *want);
    }
}
