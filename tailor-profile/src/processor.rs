//! FeedbackProcessor — folds one event into a user profile.
//!
//! Pure with respect to storage: the caller owns append-then-fold
//! ordering and per-user write serialization. This keeps the fold
//! testable and the store free to defer folding.

use chrono::{DateTime, Utc};
use tracing::debug;

use tailor_core::config::FeedbackConfig;
use tailor_core::content::ContentItem;
use tailor_core::feedback::event::{FeedbackEvent, FeedbackSignal};
use tailor_core::models::context::ContextFactor;
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::reading::ReadingLevel;
use tailor_core::profile::{UserProfile, Weight};

use crate::fold::{self, FoldInput};
use crate::signals;

/// Folds feedback events into preference deltas.
pub struct FeedbackProcessor {
    config: FeedbackConfig,
}

impl FeedbackProcessor {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Fold one event into `profile`.
    ///
    /// `content` is the item the feedback refers to; without it only the
    /// content-independent updates (context affinities, discovery
    /// openness) are applied.
    pub fn apply(
        &self,
        profile: &mut UserProfile,
        event: &FeedbackEvent,
        content: Option<&ContentItem>,
        now: DateTime<Utc>,
    ) {
        let normalized = signals::normalize(&event.signal);
        let weight = signals::signal_weight(&event.signal, &self.config);
        let recency = signals::recency::factor(
            event.timestamp,
            now,
            self.config.recency_half_life_days,
        );

        if let Some(item) = content {
            self.fold_topics(profile, item, normalized, weight, recency, now);
            self.fold_type_affinity(profile, item, normalized, weight, recency, now);
            if let FeedbackSignal::Implicit {
                completion_rate,
                reading_speed_ratio,
                ..
            } = &event.signal
            {
                self.adapt_reading_level(profile, item, *completion_rate, *reading_speed_ratio);
            }
        }

        if let Some(context) = &event.context {
            self.fold_context(profile, context.factors(), normalized, recency);
        }

        if let FeedbackSignal::Discovery { .. } = &event.signal {
            self.fold_openness(profile, normalized, recency);
        }

        profile.event_count += 1;
        profile.updated_at = now;
        debug!(
            user_id = %profile.user_id,
            event_id = %event.event_id,
            normalized,
            "event folded"
        );
    }

    fn fold_topics(
        &self,
        profile: &mut UserProfile,
        item: &ContentItem,
        normalized: f64,
        weight: f64,
        recency: f64,
        now: DateTime<Utc>,
    ) {
        for (topic, relevance) in &item.topic_scores {
            if *relevance <= 0.0 {
                continue;
            }
            let input = FoldInput {
                normalized_value: normalized,
                signal_weight: weight,
                recency,
                topic_relevance: *relevance,
            };
            let current = profile
                .topic_preferences
                .entry(topic.clone())
                .or_insert_with(|| TopicPreference::neutral(now));
            *current = fold::apply(current, input, &self.config, now);
        }
    }

    fn fold_type_affinity(
        &self,
        profile: &mut UserProfile,
        item: &ContentItem,
        normalized: f64,
        weight: f64,
        recency: f64,
        now: DateTime<Utc>,
    ) {
        let input = FoldInput {
            normalized_value: normalized,
            signal_weight: weight,
            recency,
            topic_relevance: 1.0,
        };
        let current = profile
            .type_affinities
            .entry(item.content_type.clone())
            .or_insert_with(|| TopicPreference::neutral(now));
        *current = fold::apply(current, input, &self.config, now);
    }

    /// Nudge the per-language reading level from behavioral evidence.
    /// Only the event's content language is touched; other languages
    /// are never mutated.
    fn adapt_reading_level(
        &self,
        profile: &mut UserProfile,
        item: &ContentItem,
        completion_rate: f64,
        reading_speed_ratio: Option<f64>,
    ) {
        let ability = profile
            .reading_levels
            .entry(item.language.clone())
            .or_default();

        // Rolling speed baseline: exponential smoothing of the observed
        // ratio re-expressed against the current baseline.
        if let Some(ratio) = reading_speed_ratio {
            if ratio > 0.0 {
                let alpha = self.config.speed_baseline_smoothing;
                let baseline = ability.speed_baseline_wpm.unwrap_or(1.0);
                ability.speed_baseline_wpm = Some(baseline * (1.0 - alpha) + baseline * ratio * alpha);
            }
        }

        let bands_above = ability.level.bands_above(item.reading_level_score);
        let step = self.config.reading_level_step;
        let comfortable = completion_rate >= 0.8
            && reading_speed_ratio.map(|r| r >= 0.8).unwrap_or(true);
        let struggling = completion_rate <= 0.3;

        let current_score = ability.level.as_score();
        if comfortable && bands_above > 0.0 {
            // Finishing above-level content comfortably: move up.
            ability.level = ReadingLevel::from_score(current_score + step * bands_above);
            ability.confidence = ability.confidence + (0.05).into();
        } else if struggling && bands_above > 0.0 {
            // Abandoning above-level content: evidence the level is right.
            ability.confidence = ability.confidence + (0.03).into();
        } else if struggling && bands_above <= 0.0 {
            // Abandoning at-or-below-level content says little about level.
            ability.confidence = ability.confidence * 0.98;
        } else {
            ability.confidence = ability.confidence + (0.02).into();
        }
    }

    fn fold_context(
        &self,
        profile: &mut UserProfile,
        factors: Vec<ContextFactor>,
        normalized: f64,
        recency: f64,
    ) {
        for factor in factors {
            let current = profile
                .contextual_preferences
                .entry(factor)
                .or_default();
            let updated = current.value()
                + self.config.learning_rate * (normalized * recency - current.value());
            *current = Weight::new(updated);
        }
    }

    /// Discovery responses accumulate into the discovery-openness weight
    /// read back by the discovery engine when sizing its band.
    fn fold_openness(&self, profile: &mut UserProfile, normalized: f64, recency: f64) {
        let current = profile
            .contextual_preferences
            .entry(ContextFactor::DiscoveryOpenness)
            .or_default();
        let updated = current.value()
            + self.config.learning_rate * (normalized * recency - current.value());
        *current = Weight::new(updated);
    }
}

impl Default for FeedbackProcessor {
    fn default() -> Self {
        Self::new(FeedbackConfig::default())
    }
}
