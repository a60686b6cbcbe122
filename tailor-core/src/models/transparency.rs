use serde::{Deserialize, Serialize};

use crate::profile::preference::Trend;

/// How a single topic weight came to be what it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDerivation {
    pub topic: String,
    pub weight: f64,
    pub confidence: f64,
    pub trend: Trend,
    pub manual_override: bool,
    /// Plain-language account of the supporting evidence.
    pub explanation: String,
}

/// Full preference transparency report for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceTransparency {
    pub user_id: String,
    /// Per-topic derivations, strongest weight first.
    pub topics: Vec<TopicDerivation>,
    /// Mean confidence across all topics.
    pub aggregate_confidence: f64,
    /// Events folded into the profile so far.
    pub event_count: u64,
}
