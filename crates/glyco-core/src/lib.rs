//! glyco-core
//!
//! Pure domain types for diabetes risk screening: the eight model inputs and
//! their form ranges, the binary risk label, reference values, normal bands,
//! and the fixed recommendation lists. No I/O; this is the shared vocabulary
//! of the Glyco system.

pub mod error;
pub mod guide;
pub mod label;
pub mod measurement;
pub mod recommendations;
pub mod reference;
