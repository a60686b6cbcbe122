//! EvolutionTracker — snapshots the preference vector on its triggers,
//! detects shifts, and keeps per-topic trends current.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use tailor_core::config::EvolutionConfig;
use tailor_core::profile::snapshot::{PreferenceSnapshot, SnapshotTrigger};
use tailor_core::profile::UserProfile;

use crate::trend;

/// Outcome of a snapshot: whether a preference shift was flagged and
/// which topics moved most.
#[derive(Debug, Clone, Default)]
pub struct ShiftReport {
    /// Distance to the previous snapshot, 0.0 for the first capture.
    pub distance: f64,
    /// Distance exceeded the shift threshold.
    pub shifted: bool,
    /// Topics most responsible for the change, largest delta first.
    pub responsible_topics: Vec<(String, f64)>,
}

/// Tracks preference evolution over a profile's snapshot history.
pub struct EvolutionTracker {
    config: EvolutionConfig,
}

impl EvolutionTracker {
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Snapshot if a trigger fires; no-op otherwise. Called by the
    /// engine after each fold.
    pub fn tick(&self, profile: &mut UserProfile, now: DateTime<Utc>) -> Option<ShiftReport> {
        let trigger = self.due_trigger(profile, now)?;
        Some(self.snapshot(profile, trigger, now))
    }

    /// Unconditionally capture a snapshot and refresh trends.
    pub fn snapshot(
        &self,
        profile: &mut UserProfile,
        trigger: SnapshotTrigger,
        now: DateTime<Utc>,
    ) -> ShiftReport {
        let snapshot = PreferenceSnapshot {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            weights: profile
                .topic_preferences
                .iter()
                .map(|(t, p)| (t.clone(), p.weight.value()))
                .collect(),
            aggregate_confidence: profile.aggregate_confidence(),
            event_count: profile.event_count,
            trigger,
        };

        let report = self.compare(profile.evolution_history.last(), &snapshot);
        if report.shifted {
            info!(
                user_id = %profile.user_id,
                distance = report.distance,
                topics = ?report.responsible_topics,
                "preference shift detected"
            );
        } else {
            debug!(user_id = %profile.user_id, ?trigger, "snapshot taken");
        }

        profile.push_snapshot(snapshot);
        self.refresh_trends(profile);
        report
    }

    /// Which trigger, if any, is due.
    fn due_trigger(&self, profile: &UserProfile, now: DateTime<Utc>) -> Option<SnapshotTrigger> {
        let last = match profile.evolution_history.last() {
            // First capture once anything has been learned.
            None => {
                return (profile.event_count > 0).then_some(SnapshotTrigger::EventCount);
            }
            Some(last) => last,
        };

        if now - last.timestamp >= Duration::hours(self.config.snapshot_interval_hours as i64) {
            return Some(SnapshotTrigger::Periodic);
        }
        if profile.event_count.saturating_sub(last.event_count)
            >= self.config.snapshot_every_events
        {
            return Some(SnapshotTrigger::EventCount);
        }
        None
    }

    fn compare(
        &self,
        previous: Option<&PreferenceSnapshot>,
        current: &PreferenceSnapshot,
    ) -> ShiftReport {
        let Some(previous) = previous else {
            return ShiftReport::default();
        };

        let distance = previous.distance(current);
        let shifted = distance > self.config.shift_threshold;

        let mut responsible_topics: Vec<(String, f64)> = current
            .weights
            .keys()
            .chain(previous.weights.keys())
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .map(|topic| {
                let now = current.weights.get(topic).copied().unwrap_or(0.0);
                let then = previous.weights.get(topic).copied().unwrap_or(0.0);
                (topic.clone(), (now - then).abs())
            })
            .collect();
        responsible_topics.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        responsible_topics.truncate(3);

        ShiftReport {
            distance,
            shifted,
            responsible_topics,
        }
    }

    /// Re-derive each topic's trend from the last few snapshots.
    fn refresh_trends(&self, profile: &mut UserProfile) {
        let history = profile.evolution_history.clone();
        for (topic, pref) in profile.topic_preferences.iter_mut() {
            let slope = trend::slope(&history, topic, self.config.trend_window);
            pref.trend = trend::classify(slope, self.config.trend_slope_epsilon);
        }
    }
}

impl Default for EvolutionTracker {
    fn default() -> Self {
        Self::new(EvolutionConfig::default())
    }
}
