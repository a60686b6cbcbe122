pub mod content_config;
pub mod defaults;
pub mod discovery_config;
pub mod evolution_config;
pub mod feedback_config;
pub mod recommend_config;
pub mod scoring_config;

pub use content_config::ContentConfig;
pub use discovery_config::DiscoveryConfig;
pub use evolution_config::EvolutionConfig;
pub use feedback_config::FeedbackConfig;
pub use recommend_config::RecommendConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::TailorResult;

/// Aggregate configuration for the whole engine, loadable from TOML.
/// Every tunable the design leaves open (half-lives, the divergence
/// band, learning rates, thresholds) lives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorConfig {
    pub feedback: FeedbackConfig,
    pub scoring: ScoringConfig,
    pub recommend: RecommendConfig,
    pub discovery: DiscoveryConfig,
    pub evolution: EvolutionConfig,
    pub content: ContentConfig,
}

impl TailorConfig {
    /// Parse a TOML document; absent keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> TailorResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
