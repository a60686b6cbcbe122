use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::preference::TopicPreference;
use super::reading::{Language, ReadingAbility};
use super::snapshot::PreferenceSnapshot;
use super::weight::Weight;
use crate::constants::MAX_SNAPSHOTS_PER_USER;
use crate::models::context::ContextFactor;

/// Per-user preference state. Created on first interaction with neutral
/// defaults and low confidence; mutated only by the feedback processor
/// (automatic) or explicit override calls (manual).
///
/// Reads may observe a profile that trails the event log by an in-flight
/// fold — recommendation paths tolerate this bounded staleness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    /// Topic → learned preference.
    pub topic_preferences: HashMap<String, TopicPreference>,
    /// Reading ability per language. Languages are independent:
    /// no operation may mutate more than one entry.
    pub reading_levels: HashMap<Language, ReadingAbility>,
    /// Context factor → learned affinity weight.
    pub contextual_preferences: HashMap<ContextFactor, Weight>,
    /// Content type → learned affinity. Keys double as the set of
    /// "tried" types for discovery novelty.
    pub type_affinities: HashMap<String, TopicPreference>,
    /// Number of feedback events folded into this profile.
    pub event_count: u64,
    /// Bounded, ordered snapshot history (oldest first).
    pub evolution_history: Vec<PreferenceSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile with neutral defaults and cold-start confidence.
    pub fn new(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            topic_preferences: HashMap::new(),
            reading_levels: HashMap::new(),
            contextual_preferences: HashMap::new(),
            type_affinities: HashMap::new(),
            event_count: 0,
            evolution_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mean confidence across all topic preferences.
    /// Zero topics means zero aggregate confidence (fully cold).
    pub fn aggregate_confidence(&self) -> f64 {
        if self.topic_preferences.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .topic_preferences
            .values()
            .map(|p| p.confidence.value())
            .sum();
        sum / self.topic_preferences.len() as f64
    }

    /// Whether this profile has too little history to personalize.
    /// Downstream recommenders favor popular/diverse content instead.
    pub fn is_cold_start(&self, min_events: u64) -> bool {
        self.event_count < min_events || self.aggregate_confidence() < Confidence::LOW
    }

    /// Reading ability for a language, defaulting without inserting.
    pub fn reading_ability(&self, language: &Language) -> ReadingAbility {
        self.reading_levels
            .get(language)
            .copied()
            .unwrap_or_default()
    }

    /// Topics whose confidence exceeds `threshold` — the explored set
    /// consumed by the discovery engine.
    pub fn explored_topics(&self, threshold: f64) -> Vec<&str> {
        self.topic_preferences
            .iter()
            .filter(|(_, p)| p.confidence.value() >= threshold)
            .map(|(t, _)| t.as_str())
            .collect()
    }

    /// Learned contextual affinity, neutral when unobserved.
    pub fn contextual_weight(&self, factor: ContextFactor) -> Weight {
        self.contextual_preferences
            .get(&factor)
            .copied()
            .unwrap_or_default()
    }

    /// Append a snapshot, evicting the oldest past the retention bound.
    pub fn push_snapshot(&mut self, snapshot: PreferenceSnapshot) {
        self.evolution_history.push(snapshot);
        if self.evolution_history.len() > MAX_SNAPSHOTS_PER_USER {
            let excess = self.evolution_history.len() - MAX_SNAPSHOTS_PER_USER;
            self.evolution_history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::snapshot::SnapshotTrigger;

    #[test]
    fn new_profile_is_cold() {
        let p = UserProfile::new("u1", Utc::now());
        assert!(p.is_cold_start(5));
        assert_eq!(p.aggregate_confidence(), 0.0);
    }

    #[test]
    fn snapshot_history_is_bounded() {
        let mut p = UserProfile::new("u1", Utc::now());
        for i in 0..(MAX_SNAPSHOTS_PER_USER + 10) {
            p.push_snapshot(PreferenceSnapshot {
                id: i.to_string(),
                timestamp: Utc::now(),
                weights: HashMap::new(),
                aggregate_confidence: 0.0,
                event_count: i as u64,
                trigger: SnapshotTrigger::Periodic,
            });
        }
        assert_eq!(p.evolution_history.len(), MAX_SNAPSHOTS_PER_USER);
        // Oldest evicted, newest kept.
        assert_eq!(p.evolution_history.last().unwrap().id, (MAX_SNAPSHOTS_PER_USER + 9).to_string());
    }
}
