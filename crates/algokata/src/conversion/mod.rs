//! ## Layer 4: Conversion
//!
//! Rendering numbers into written forms: Roman numerals and spelled-out
//! decimal strings. Both conversions walk the constant tables from the
//! primitives layer.
//!
//! ```text
//!              ┌─────────────────────┐
//!              │      Conversion     │
//!              └──────────┬──────────┘
//!              ┌──────────┴──────────┐
//!              ▼                     ▼
//!        ┌──────────┐         ┌───────────┐
//!        │  roman   │         │ spelling  │
//!        │  greedy  │         │ digit to  │
//!        │  table   │         │   word    │
//!        └────┬─────┘         └─────┬─────┘
//!             │                     │
//!             └──────────┬──────────┘
//!                        ▼
//!               primitives::tables
//! ```

pub mod roman;
pub mod spelling;
