//! The preference fold: gated weight update + consistency-driven
//! confidence update.
//!
//! ```text
//! delta      = signalWeight × normalizedValue × recencyFactor × topicRelevance
//! gate       = 1 − confidence × (1 − signalStrength)
//! newWeight  = oldWeight + learningRate × (delta − oldWeight) × gate
//! ```
//!
//! The gate keeps weak signals from destabilizing a well-established
//! preference. Results are clamped by the `Weight`/`Confidence` newtypes.

use chrono::{DateTime, Utc};

use tailor_core::config::FeedbackConfig;
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::{Confidence, Weight};

/// Inputs to one topic fold, already normalized and recency-weighted.
#[derive(Debug, Clone, Copy)]
pub struct FoldInput {
    /// Signal value in [-1.0, 1.0].
    pub normalized_value: f64,
    /// Signal weight for the event kind.
    pub signal_weight: f64,
    /// Recency factor from the event timestamp.
    pub recency: f64,
    /// How strongly the content expresses this topic, [0.0, 1.0].
    pub topic_relevance: f64,
}

impl FoldInput {
    /// The raw delta this observation pulls the weight toward.
    pub fn delta(&self) -> f64 {
        self.signal_weight * self.normalized_value * self.recency * self.topic_relevance
    }

    /// Signal strength used by the confidence gate, [0.0, 1.0].
    pub fn strength(&self) -> f64 {
        (self.signal_weight * self.normalized_value.abs() * self.topic_relevance).min(1.0)
    }
}

/// Apply one observation to a topic preference.
///
/// Preferences pinned by a manual override are returned unchanged;
/// overrides resist automatic overwrite until explicitly reset.
pub fn apply(
    pref: &TopicPreference,
    input: FoldInput,
    config: &FeedbackConfig,
    now: DateTime<Utc>,
) -> TopicPreference {
    if pref.manual_override {
        return pref.clone();
    }

    let delta = input.delta();
    let gate = confidence_gate(pref.confidence, input.strength());
    let new_weight =
        pref.weight.value() + config.learning_rate * (delta - pref.weight.value()) * gate;

    TopicPreference {
        weight: Weight::new(new_weight),
        confidence: update_confidence(pref, delta, input.recency, config),
        last_updated: now,
        trend: pref.trend,
        manual_override: false,
    }
}

/// Gate in [0.0, 1.0]: high existing confidence + weak signal → small gate.
fn confidence_gate(confidence: Confidence, strength: f64) -> f64 {
    (1.0 - confidence.value() * (1.0 - strength.clamp(0.0, 1.0))).clamp(0.0, 1.0)
}

/// Confidence rises on same-direction observations, decays under
/// conflicting ones. Both movements are recency-weighted so stale
/// observations matter less.
fn update_confidence(
    pref: &TopicPreference,
    delta: f64,
    recency: f64,
    config: &FeedbackConfig,
) -> Confidence {
    let current = pref.confidence.value();
    // A near-neutral weight has no direction yet; any observation counts
    // as consistent.
    let consistent = pref.weight.value().abs() < 0.05 || delta * pref.weight.value() >= 0.0;

    let updated = if consistent {
        current + config.confidence_step * (1.0 - current) * recency
    } else {
        current * (1.0 - (1.0 - config.conflict_decay) * recency)
    };
    Confidence::new(updated)
}
