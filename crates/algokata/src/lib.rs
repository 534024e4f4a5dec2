//! # algokata — classic algorithmic routines for Rust
//!
//! A catalog of small, self-contained algorithmic building blocks: numeric
//! and geometric predicates, numeral conversion, string and sequence
//! manipulation, square-matrix transforms, and digit-permutation utilities.
//!
//! Every routine is a pure function over its arguments, with no shared state
//! and no I/O. The routines that mutate their input (`sort_ascending`,
//! `rotate_clockwise`) say so through an exclusive `&mut` borrow and operate
//! strictly in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use algokata::prelude::*;
//!
//! // Predicates
//! assert!(is_positive(0));
//! assert!(is_isosceles_triangle(2, 3, 2));
//! assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
//! assert!(is_palindrome("abcba"));
//! assert!(contains_digit(123450, 0));
//!
//! // Selection
//! assert_eq!(max_of_three(-5, 0, 5), 5);
//! assert_eq!(index_of("qwerty", 't'), 4);
//! assert_eq!(balance_index(&[1, 2, 5, 3, 0]), 2);
//!
//! // Conversion
//! assert_eq!(to_roman_numerals(26), "XXVI");
//! assert_eq!(spell_out_number("-10"), "minus one zero");
//! ```
//!
//! ## Matrix transforms
//!
//! The spiral generator allocates a fresh matrix; the rotation works in
//! place with no second allocation, which matters for large inputs:
//!
//! ```rust
//! use algokata::prelude::*;
//!
//! let spiral = spiral_matrix(3);
//! assert_eq!(spiral, vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]);
//!
//! let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! rotate_clockwise(&mut m);
//! assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
//! ```
//!
//! ## Sequence transforms
//!
//! `shuffle_chars` detects the shuffle's cycle period, so astronomically
//! large iteration counts finish in a handful of steps:
//!
//! ```rust
//! use algokata::prelude::*;
//!
//! let mut xs = vec![-2, 9, 5, -3];
//! sort_ascending(&mut xs);
//! assert_eq!(xs, vec![-3, -2, 5, 9]);
//!
//! assert_eq!(shuffle_chars("012345", 1), "024135");
//! assert_eq!(shuffle_chars("012345", 1_000_000_000_000), "012345");
//!
//! assert_eq!(next_bigger_number(12345), 12354);
//! assert_eq!(next_bigger_number(54321), 54321); // already maximal
//! ```
//!
//! ## Input contracts
//!
//! The routines assume well-formed input within their documented domains and
//! perform no runtime validation; out-of-domain input produces a typed but
//! unspecified result rather than an error value. The per-function docs state
//! each domain (for example `to_roman_numerals` supports 1..=39, and
//! `rotate_clockwise` expects a square matrix).
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; only `alloc` is required (for
//! the `String`/`Vec` producing routines). Disable default features to remove
//! the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! algokata = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value shapes and constant lookup tables.
pub mod primitives;

// Layer 2: Predicates - boolean checks over numbers, strings, and board positions.
pub mod predicates;

// Layer 3: Selection - picking elements and indices out of inputs.
pub mod selection;

// Layer 4: Conversion - numeral and digit-to-word conversion.
pub mod conversion;

// Layer 5: Matrix - square-matrix construction and in-place transforms.
pub mod matrix;

// Layer 6: Sequence - order-changing transforms over sequences and strings.
pub mod sequence;

// Standard algokata prelude.
pub mod prelude {
    pub use crate::conversion::roman::to_roman_numerals;
    pub use crate::conversion::spelling::spell_out_number;
    pub use crate::matrix::rotation::rotate_clockwise;
    pub use crate::matrix::spiral::spiral_matrix;
    pub use crate::predicates::chess::can_queen_capture_king;
    pub use crate::predicates::digits::contains_digit;
    pub use crate::predicates::palindrome::is_palindrome;
    pub use crate::predicates::sign::is_positive;
    pub use crate::predicates::triangle::is_isosceles_triangle;
    pub use crate::primitives::position::Position;
    pub use crate::selection::extrema::max_of_three;
    pub use crate::selection::search::{balance_index, index_of};
    pub use crate::sequence::permutation::next_bigger_number;
    pub use crate::sequence::shuffle::shuffle_chars;
    pub use crate::sequence::sorting::sort_ascending;
}
