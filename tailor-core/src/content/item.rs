use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::profile::reading::Language;

/// A candidate content item as served by the content store.
/// Topic scores and the reading-level score come from the content
/// analyzer at ingest time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub language: Language,
    /// Topic → relevance score in [0.0, 1.0].
    pub topic_scores: HashMap<String, f64>,
    /// Coarse content kind ("article", "essay", "short_story", ...).
    pub content_type: String,
    /// Continuous reading-level score on the band scale (0.0-4.0),
    /// specific to `language`.
    pub reading_level_score: f64,
    /// Fixed-length embedding vector.
    pub embedding: Vec<f32>,
    /// Estimated minutes to read.
    pub estimated_reading_time_min: u32,
    /// Global popularity signal in [0.0, 1.0], used for cold-start ranking.
    #[serde(default)]
    pub popularity: f64,
    pub tags: Vec<String>,
}

impl ContentItem {
    /// The item's strongest topic, ties broken lexicographically for
    /// deterministic output.
    pub fn dominant_topic(&self) -> Option<&str> {
        self.topic_scores
            .iter()
            .max_by(|a, b| {
                a.1.partial_cmp(b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(t, _)| t.as_str())
    }

    /// Top `n` topics by score, deterministic order.
    pub fn dominant_topics(&self, n: usize) -> Vec<&str> {
        let mut topics: Vec<(&str, f64)> = self
            .topic_scores
            .iter()
            .map(|(t, s)| (t.as_str(), *s))
            .collect();
        topics.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        topics.into_iter().take(n).map(|(t, _)| t).collect()
    }

    /// Cosine similarity between two item embeddings.
    /// Returns 0.0 when either vector is empty or zero-length.
    pub fn embedding_similarity(&self, other: &Self) -> f64 {
        cosine(&self.embedding, &other.embedding)
    }
}

/// Cosine similarity over f32 slices, 0.0 for degenerate inputs.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut na = 0.0f64;
    let mut nb = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += *x as f64 * *y as f64;
        na += *x as f64 * *x as f64;
        nb += *y as f64 * *y as f64;
    }
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na.sqrt() * nb.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(topics: &[(&str, f64)]) -> ContentItem {
        ContentItem {
            id: "c1".to_string(),
            language: Language::English,
            topic_scores: topics.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
            content_type: "article".to_string(),
            reading_level_score: 2.0,
            embedding: vec![],
            estimated_reading_time_min: 10,
            popularity: 0.5,
            tags: vec![],
        }
    }

    #[test]
    fn dominant_topic_picks_highest() {
        let i = item(&[("scifi", 0.9), ("mystery", 0.3)]);
        assert_eq!(i.dominant_topic(), Some("scifi"));
    }

    #[test]
    fn dominant_topic_tie_is_deterministic() {
        let i = item(&[("b", 0.5), ("a", 0.5)]);
        assert_eq!(i.dominant_topic(), Some("a"));
    }

    #[test]
    fn cosine_handles_degenerate_inputs() {
        assert_eq!(cosine(&[], &[]), 0.0);
        assert_eq!(cosine(&[1.0], &[0.0]), 0.0);
        assert!((cosine(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-9);
    }
}
