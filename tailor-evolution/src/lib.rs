//! # tailor-evolution
//!
//! Periodic preference snapshots, shift detection across consecutive
//! captures, and per-topic trend derivation from the snapshot history.

pub mod tracker;
pub mod trend;

pub use tracker::{EvolutionTracker, ShiftReport};
