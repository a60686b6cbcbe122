use serde::{Deserialize, Serialize};

use super::defaults;

/// Discovery engine configuration.
///
/// The divergence band is the base band; the user's accumulated
/// discovery-openness weight widens or narrows it at selection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Confidence above which a topic counts as explored.
    pub explored_confidence: f64,
    /// Minimum reading-level fit a discovery candidate must meet.
    /// Divergence never sacrifices comprehensibility.
    pub accessibility_threshold: f64,
    /// Lower edge of the divergence band; less is not discovery.
    pub min_divergence: f64,
    /// Upper edge of the divergence band; more is incompatible.
    pub max_divergence: f64,
    /// Blend weight of the content-type novelty term.
    pub novelty_weight: f64,
    /// How far one unit of discovery-openness weight moves the band edges.
    pub openness_band_scale: f64,
    /// Maximum bridging topics reported per recommendation.
    pub max_bridging_topics: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            explored_confidence: defaults::DEFAULT_EXPLORED_CONFIDENCE,
            accessibility_threshold: defaults::DEFAULT_ACCESSIBILITY_THRESHOLD,
            min_divergence: defaults::DEFAULT_MIN_DIVERGENCE,
            max_divergence: defaults::DEFAULT_MAX_DIVERGENCE,
            novelty_weight: defaults::DEFAULT_NOVELTY_WEIGHT,
            openness_band_scale: defaults::DEFAULT_OPENNESS_BAND_SCALE,
            max_bridging_topics: defaults::DEFAULT_MAX_BRIDGING_TOPICS,
        }
    }
}
