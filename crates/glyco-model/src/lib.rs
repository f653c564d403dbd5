//! glyco-model
//!
//! Loads the pre-fit scaler and classifier artifacts and evaluates
//! measurement sets against them. Both artifacts are immutable after load
//! and shared across requests without locking.

pub mod artifacts;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod scaler;
