//! ## Layer 3: Selection
//!
//! Picking elements and indices out of inputs: the largest of several
//! values, the position of a character, or the index that balances a
//! slice around itself.
//!
//! ```text
//!              ┌─────────────────────┐
//!              │      Selection      │
//!              └──────────┬──────────┘
//!              ┌──────────┴──────────┐
//!              ▼                     ▼
//!        ┌──────────┐         ┌───────────┐
//!        │ extrema  │         │  search   │
//!        │ max of 3 │         │ index_of  │
//!        │          │         │ balance   │
//!        └──────────┘         └───────────┘
//! ```

pub mod extrema;
pub mod search;
