//! ## Layer 6: Sequence
//!
//! Order-changing transforms over slices and strings: in-place sorting,
//! the repeated odd/even character shuffle, and the next-permutation
//! step over decimal digits.
//!
//! ```text
//!              ┌─────────────────────┐
//!              │      Sequence       │
//!              └──────────┬──────────┘
//!       ┌──────────┬──────┴───────────┐
//!       ▼          ▼                  ▼
//! ┌──────────┐ ┌──────────┐   ┌─────────────┐
//! │ sorting  │ │ shuffle  │   │ permutation │
//! │insertion │ │ odd/even │   │ next bigger │
//! │ in place │ │ + cycle  │   │   number    │
//! └──────────┘ └──────────┘   └─────────────┘
//! ```

pub mod permutation;
pub mod shuffle;
pub mod sorting;
