//! ## Layer 1: Primitives
//!
//! Foundational value shapes and constant lookup tables shared by the
//! higher layers. Nothing in this layer computes; it only names things.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Primitives                  │
//! │  ┌───────────────┐   ┌───────────────────┐  │
//! │  │   position    │   │      tables       │  │
//! │  │  board coords │   │  roman + digit    │  │
//! │  │               │   │  word constants   │  │
//! │  └───────┬───────┘   └─────────┬─────────┘  │
//! └──────────┼─────────────────────┼────────────┘
//!            ▼                     ▼
//!       predicates          conversion layer
//! ```

pub mod position;
pub mod tables;
