//! # tailor-scoring
//!
//! The interest scorer: a pure, deterministic function from
//! (profile, content) to a bounded score with a per-factor breakdown.
//! Identical inputs always yield identical output; explanations are
//! reproducible.

pub mod batch;
pub mod interest;
pub mod reading_fit;

pub use batch::score_pool;
pub use interest::{score, score_breakdown, ScoreBreakdown};
pub use reading_fit::{fit, is_level_mismatch};
