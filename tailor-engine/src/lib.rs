//! # tailor-engine
//!
//! The facade the conversational layer calls. Wires the feedback
//! processor, contextual recommender, discovery engine, and evolution
//! tracker over shared profile and content stores, and owns the
//! cross-cutting concerns: per-user write serialization,
//! last-request-wins sessions, deadlines, and the degradation flags.

pub mod engine;
pub mod session;

pub use engine::TailorEngine;
