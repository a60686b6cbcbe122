//! # tailor-recommend
//!
//! Contextual recommendation pipeline:
//! resolve context (explicit → inferred → neutral) → score pool →
//! time-budget filter → bounded contextual boosts → diversity re-rank,
//! with a fixed-order relaxation ladder when constraints empty the pool.

pub mod context;
pub mod diversity;
pub mod engine;
pub mod filters;

pub use engine::{ContextualRecommender, RankingOutcome};
