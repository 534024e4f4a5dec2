//! ## Layer 5: Matrix
//!
//! Square-matrix construction and transformation. The spiral generator
//! allocates its result; the rotation is strictly in place, trading a
//! second allocation for a two-phase swap scheme.
//!
//! ```text
//!              ┌─────────────────────┐
//!              │       Matrix        │
//!              └──────────┬──────────┘
//!              ┌──────────┴──────────┐
//!              ▼                     ▼
//!        ┌──────────┐         ┌───────────┐
//!        │  spiral  │         │ rotation  │
//!        │ ring-by- │         │ transpose │
//!        │ ring fill│         │ + reverse │
//!        └──────────┘         └───────────┘
//!          allocates            in place
//! ```

pub mod rotation;
pub mod spiral;
