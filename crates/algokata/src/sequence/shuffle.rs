//! Repeated odd/even character shuffle.
//!
//! ## Purpose
//!
//! Apply the odd/even shuffle step to a string a given number of times.
//! One step rebuilds the string as all even-indexed characters in order
//! followed by all odd-indexed characters in order.
//!
//! ## Key concepts
//!
//! * **Cycle detection**: the shuffle permutes positions, and repeated
//!   application of a fixed permutation is periodic. The period depends
//!   only on the string length. Once the running string equals the
//!   original again after `p` steps, the answer for any count is the
//!   answer for `count % p` steps from the original, so astronomically
//!   large counts cost only one full period plus a remainder.
//! * **Buffer reuse**: the step writes into a second buffer and the two
//!   are swapped each round, so the whole run allocates exactly twice
//!   regardless of the iteration count.
//!
//! ## Invariants
//!
//! * When the cycle closes, the running string *is* the original, so
//!   restarting the counter continues from the right state without
//!   copying the original back in.
//! * Strings of length 0 or 1, and length 2 (even prefix then odd
//!   suffix reproduces the input), have period 1 and terminate on the
//!   first cycle check.

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::mem;

// ============================================================================
// Shuffle
// ============================================================================

/// Shuffles `string` by the odd/even step, `iterations` times.
///
/// One step concatenates the even-indexed characters (0, 2, 4, ...)
/// with the odd-indexed characters (1, 3, 5, ...). Iteration counts far
/// beyond the shuffle's cycle period are folded down by detecting the
/// cycle, so very large counts stay cheap.
///
/// # Example
///
/// ```rust
/// use algokata::sequence::shuffle::shuffle_chars;
///
/// assert_eq!(shuffle_chars("012345", 1), "024135");
/// assert_eq!(shuffle_chars("012345", 2), "043215");
/// assert_eq!(shuffle_chars("qwerty", 55), "qrwtey");
/// ```
pub fn shuffle_chars(string: &str, iterations: u64) -> String {
    let original: Vec<char> = string.chars().collect();
    let mut current = original.clone();
    let mut next: Vec<char> = Vec::with_capacity(original.len());

    let mut remaining = iterations;
    let mut step = 0u64;
    while step < remaining {
        next.clear();
        next.extend(current.iter().copied().step_by(2));
        next.extend(current.iter().copied().skip(1).step_by(2));
        mem::swap(&mut current, &mut next);
        step += 1;

        if current == original {
            // Cycle closed after `step` rounds; fold the rest down.
            remaining = iterations % step;
            step = 0;
        }
    }

    current.into_iter().collect()
}
