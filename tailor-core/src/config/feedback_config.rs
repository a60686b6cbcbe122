use serde::{Deserialize, Serialize};

use super::defaults;

/// Feedback processor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Step size of the weight fold.
    pub learning_rate: f64,
    /// Signal weight for explicit ratings and like/dislike.
    pub explicit_signal_weight: f64,
    /// Signal weight for behavioral observations.
    pub implicit_signal_weight: f64,
    /// Signal weight for discovery responses.
    pub discovery_signal_weight: f64,
    /// Half-life (days) of the recency factor applied to event deltas.
    pub recency_half_life_days: f64,
    /// Confidence gain per same-direction observation.
    pub confidence_step: f64,
    /// Multiplicative confidence decay under a conflicting observation.
    pub conflict_decay: f64,
    /// Events below which a profile counts as cold start.
    pub min_personalization_events: u64,
    /// Step applied to per-language reading-level nudges.
    pub reading_level_step: f64,
    /// Exponential smoothing factor for the rolling speed baseline.
    pub speed_baseline_smoothing: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            explicit_signal_weight: defaults::DEFAULT_EXPLICIT_SIGNAL_WEIGHT,
            implicit_signal_weight: defaults::DEFAULT_IMPLICIT_SIGNAL_WEIGHT,
            discovery_signal_weight: defaults::DEFAULT_DISCOVERY_SIGNAL_WEIGHT,
            recency_half_life_days: defaults::DEFAULT_RECENCY_HALF_LIFE_DAYS,
            confidence_step: defaults::DEFAULT_CONFIDENCE_STEP,
            conflict_decay: defaults::DEFAULT_CONFLICT_DECAY,
            min_personalization_events: defaults::DEFAULT_MIN_PERSONALIZATION_EVENTS,
            reading_level_step: defaults::DEFAULT_READING_LEVEL_STEP,
            speed_baseline_smoothing: defaults::DEFAULT_SPEED_BASELINE_SMOOTHING,
        }
    }
}
