use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a snapshot to be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotTrigger {
    /// Periodic timer elapsed.
    Periodic,
    /// Enough folds accumulated since the last snapshot.
    EventCount,
    /// A preference shift was detected.
    Shift,
    /// Explicit request (transparency, debugging).
    Manual,
}

/// A point-in-time capture of a user's preference vector.
/// Immutable once written; retained in a bounded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    /// UUID v4 identifier.
    pub id: String,
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Topic weights at snapshot time.
    pub weights: HashMap<String, f64>,
    /// Mean confidence across all topics at snapshot time.
    pub aggregate_confidence: f64,
    /// Profile event count at snapshot time, used for the
    /// every-N-events trigger.
    pub event_count: u64,
    /// What triggered the capture.
    pub trigger: SnapshotTrigger,
}

impl PreferenceSnapshot {
    /// L2 distance between two snapshots over the union of their topics.
    /// Topics absent from one side count as weight 0.
    pub fn distance(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        for (topic, w) in &self.weights {
            let o = other.weights.get(topic).copied().unwrap_or(0.0);
            sum += (w - o) * (w - o);
        }
        for (topic, o) in &other.weights {
            if !self.weights.contains_key(topic) {
                sum += o * o;
            }
        }
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(weights: &[(&str, f64)]) -> PreferenceSnapshot {
        PreferenceSnapshot {
            id: "s".to_string(),
            timestamp: Utc::now(),
            weights: weights
                .iter()
                .map(|(t, w)| (t.to_string(), *w))
                .collect(),
            aggregate_confidence: 0.5,
            event_count: 0,
            trigger: SnapshotTrigger::Manual,
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = snap(&[("scifi", 0.8), ("mystery", 0.2)]);
        let b = snap(&[("scifi", 0.2), ("history", 0.5)]);
        assert!((a.distance(&b) - b.distance(&a)).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = snap(&[("scifi", 0.8)]);
        assert_eq!(a.distance(&a), 0.0);
    }
}
