use serde::{Deserialize, Serialize};

use super::defaults;

/// Interest scorer configuration. Factor weights are normalized at
/// score time, so they need not sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the topic-match component.
    pub topic_factor_weight: f64,
    /// Weight of the content-type affinity component.
    pub type_affinity_weight: f64,
    /// Weight of the reading-level fit component.
    pub reading_fit_weight: f64,
    /// Fit penalty per band of content above the user's level.
    /// Above-level content costs more than below-level content.
    pub above_level_penalty: f64,
    /// Fit penalty per band of content below the user's level.
    pub below_level_penalty: f64,
    /// Bands above the user's level beyond which an item is flagged
    /// as a level mismatch.
    pub mismatch_bands: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            topic_factor_weight: defaults::DEFAULT_TOPIC_FACTOR_WEIGHT,
            type_affinity_weight: defaults::DEFAULT_TYPE_AFFINITY_WEIGHT,
            reading_fit_weight: defaults::DEFAULT_READING_FIT_WEIGHT,
            above_level_penalty: defaults::DEFAULT_ABOVE_LEVEL_PENALTY,
            below_level_penalty: defaults::DEFAULT_BELOW_LEVEL_PENALTY,
            mismatch_bands: defaults::DEFAULT_MISMATCH_BANDS,
        }
    }
}
