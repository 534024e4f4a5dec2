//! ## Layer 2: Predicates
//!
//! Boolean checks over numbers, strings, and board positions. Every
//! function here is pure and total: any input of the right type yields
//! `true` or `false`, never a panic or an error.
//!
//! ```text
//!                    ┌─────────────────────┐
//!                    │      Predicates     │
//!                    └──────────┬──────────┘
//!         ┌──────────┬──────────┼──────────┬───────────┐
//!         ▼          ▼          ▼          ▼           ▼
//!    ┌────────┐ ┌─────────┐ ┌───────┐ ┌──────────┐ ┌────────┐
//!    │  sign  │ │triangle │ │ chess │ │palindrome│ │ digits │
//!    │  >= 0  │ │isosceles│ │ queen │ │ mirrored │ │ member │
//!    └────────┘ └─────────┘ └───┬───┘ └──────────┘ └────────┘
//!                               │
//!                               ▼
//!                    primitives::position
//! ```

pub mod chess;
pub mod digits;
pub mod palindrome;
pub mod sign;
pub mod triangle;
