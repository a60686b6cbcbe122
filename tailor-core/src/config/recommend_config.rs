use serde::{Deserialize, Serialize};

use super::defaults;

/// Contextual recommender configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Fractional slack on the available-time filter
    /// (items up to `available * (1 + tolerance)` pass).
    pub time_tolerance: f64,
    /// Lower bound of any contextual boost factor.
    pub boost_floor: f64,
    /// Upper bound of any contextual boost factor.
    pub boost_ceiling: f64,
    /// How strongly a contextual weight moves the boost factor
    /// (boost = 1 + weight * scale, then clamped).
    pub boost_scale: f64,
    /// Minimum historical interactions before context is inferred.
    pub min_context_samples: usize,
    /// How many recent events context inference looks at.
    pub context_history_window: usize,
    /// Multiplicative penalty applied to candidates sharing a picked
    /// item's dominant topic during diversity re-ranking.
    pub diversity_decay: f64,
    /// Extra bands of reading-level slack granted by the relaxation
    /// ladder's final step.
    pub relaxed_level_extra_bands: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            time_tolerance: defaults::DEFAULT_TIME_TOLERANCE,
            boost_floor: defaults::DEFAULT_BOOST_FLOOR,
            boost_ceiling: defaults::DEFAULT_BOOST_CEILING,
            boost_scale: defaults::DEFAULT_BOOST_SCALE,
            min_context_samples: defaults::DEFAULT_MIN_CONTEXT_SAMPLES,
            context_history_window: defaults::DEFAULT_CONTEXT_HISTORY_WINDOW,
            diversity_decay: defaults::DEFAULT_DIVERSITY_DECAY,
            relaxed_level_extra_bands: defaults::DEFAULT_RELAXED_LEVEL_EXTRA_BANDS,
        }
    }
}
