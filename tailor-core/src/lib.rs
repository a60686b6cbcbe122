//! # tailor-core
//!
//! Foundation crate for the Tailor personalization engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod content;
pub mod errors;
pub mod feedback;
pub mod models;
pub mod profile;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TailorConfig;
pub use content::ContentItem;
pub use errors::{TailorError, TailorResult};
pub use feedback::{FeedbackEvent, FeedbackSignal};
pub use profile::{Confidence, Language, ReadingLevel, TopicPreference, UserProfile, Weight};
