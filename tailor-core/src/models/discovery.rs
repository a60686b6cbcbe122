use serde::{Deserialize, Serialize};

use crate::feedback::event::DiscoveryResponse;

/// A deliberately divergent recommendation with its justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryRecommendation {
    pub content_id: String,
    /// Topical dissimilarity from the user's established preferences,
    /// within the configured divergence band.
    pub divergence_score: f64,
    /// Topics connecting the candidate back to existing preferences.
    pub bridging_topics: Vec<String>,
    /// Human-readable reason generated from the bridging topics.
    pub reason: String,
    /// User response once recorded; `None` until then.
    #[serde(default)]
    pub user_response: DiscoveryResponse,
}
