//! # tailor-discovery
//!
//! Deliberate divergence: select content outside the user's explored
//! topics, inside a bounded divergence band, never below the
//! accessibility threshold. Bridging topics connect each pick back to
//! what the user already likes.

pub mod band;
pub mod bridging;
pub mod divergence;
pub mod engine;

pub use band::DivergenceBand;
pub use engine::{DiscoveryEngine, DiscoveryOutcome};
