use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Output of a content analyzer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Topic → relevance score in [0.0, 1.0].
    pub topic_scores: HashMap<String, f64>,
    /// Continuous reading-level score on the band scale (0.0-4.0).
    pub reading_level_score: f64,
    /// Embedding vector; empty when the analyzer cannot embed.
    pub embedding: Vec<f32>,
    /// Salient phrases extracted from the text.
    pub key_phrases: Vec<String>,
    /// Set when the result came from a degraded path (keyword fallback,
    /// stale cache) rather than the full analyzer.
    #[serde(default)]
    pub low_confidence: bool,
}
