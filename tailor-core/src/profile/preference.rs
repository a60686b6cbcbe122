use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::weight::Weight;

/// Direction a preference weight has been moving across recent snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Default for Trend {
    fn default() -> Self {
        Self::Stable
    }
}

/// Learned preference state for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicPreference {
    /// Learned interest weight, negative for dislike.
    pub weight: Weight,
    /// How reliable the weight is.
    pub confidence: Confidence,
    /// When the last signal touched this topic.
    pub last_updated: DateTime<Utc>,
    /// Direction derived from the evolution history.
    #[serde(default)]
    pub trend: Trend,
    /// Set by an explicit override call. Automatic folds must not
    /// modify the weight while this is set.
    #[serde(default)]
    pub manual_override: bool,
}

impl TopicPreference {
    /// Neutral preference with cold-start confidence.
    pub fn neutral(now: DateTime<Utc>) -> Self {
        Self {
            weight: Weight::default(),
            confidence: Confidence::default(),
            last_updated: now,
            trend: Trend::Stable,
            manual_override: false,
        }
    }

    /// Preference pinned by a manual override: full confidence, protected.
    pub fn overridden(value: f64, now: DateTime<Utc>) -> Self {
        Self {
            weight: Weight::new(value),
            confidence: Confidence::new(1.0),
            last_updated: now,
            trend: Trend::Stable,
            manual_override: true,
        }
    }
}
