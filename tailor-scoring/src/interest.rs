//! Multi-factor interest score (3 factors).
//!
//! ```text
//! score = ( wT × topicMatch + wA × typeAffinity + wF × readingFit )
//!         / (wT + wA + wF)
//! ```
//!
//! All components live in [0.0, 1.0], so the normalized result does too.
//! Cold profiles blend the topic component toward the item's popularity
//! in proportion to how little confidence the profile carries.

use tailor_core::config::ScoringConfig;
use tailor_core::content::ContentItem;
use tailor_core::models::result::{ScoreExplanation, ScoreFactor};
use tailor_core::profile::UserProfile;

use crate::reading_fit;

/// Each factor computed individually for explanations and debugging.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Preference-weighted topic match, [0.0, 1.0].
    pub topic_match: f64,
    /// Share of the topic component supplied by popularity (cold start).
    pub popularity_share: f64,
    /// Content-type affinity, [0.0, 1.0].
    pub type_affinity: f64,
    /// Reading-level fit, [0.0, 1.0].
    pub reading_fit: f64,
    /// Content above the user's band by more than the mismatch limit.
    pub level_mismatch: bool,
    /// Final normalized score, [0.0, 1.0].
    pub final_score: f64,
}

impl ScoreBreakdown {
    /// Explanation factors, largest contribution first.
    pub fn explanation(&self, item: &ContentItem, config: &ScoringConfig) -> ScoreExplanation {
        let total = config.topic_factor_weight
            + config.type_affinity_weight
            + config.reading_fit_weight;
        let dominant = item.dominant_topic().unwrap_or("none");

        let topic_detail = if self.popularity_share > 0.5 {
            format!("popular content favored while preferences are forming (top topic: {dominant})")
        } else {
            format!("match on {dominant}")
        };

        ScoreExplanation {
            factors: vec![
                ScoreFactor {
                    name: "topic_match".to_string(),
                    contribution: config.topic_factor_weight * self.topic_match / total,
                    detail: topic_detail,
                },
                ScoreFactor {
                    name: "type_affinity".to_string(),
                    contribution: config.type_affinity_weight * self.type_affinity / total,
                    detail: format!("affinity for {} content", item.content_type),
                },
                ScoreFactor {
                    name: "reading_level_fit".to_string(),
                    contribution: config.reading_fit_weight * self.reading_fit / total,
                    detail: if self.level_mismatch {
                        "reading level well above the user's band".to_string()
                    } else {
                        "reading level within reach".to_string()
                    },
                },
            ],
        }
        .sorted()
    }
}

/// Interest score in [0.0, 1.0]. Pure and deterministic.
pub fn score(profile: &UserProfile, item: &ContentItem, config: &ScoringConfig) -> f64 {
    score_breakdown(profile, item, config).final_score
}

/// Score with the full per-factor breakdown.
pub fn score_breakdown(
    profile: &UserProfile,
    item: &ContentItem,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let preference_match = topic_match(profile, item);

    // Cold profiles lean on popularity; established ones on preferences.
    let confidence = profile.aggregate_confidence();
    let topic_component =
        confidence * preference_match + (1.0 - confidence) * item.popularity.clamp(0.0, 1.0);

    let type_affinity = profile
        .type_affinities
        .get(&item.content_type)
        .map(|p| (p.weight.value() + 1.0) / 2.0)
        .unwrap_or(0.5);

    let ability = profile.reading_ability(&item.language);
    let fit = reading_fit::fit(ability.level, item.reading_level_score, config);
    let mismatch = reading_fit::is_level_mismatch(ability.level, item.reading_level_score, config);

    let total =
        config.topic_factor_weight + config.type_affinity_weight + config.reading_fit_weight;
    let final_score = (config.topic_factor_weight * topic_component
        + config.type_affinity_weight * type_affinity
        + config.reading_fit_weight * fit)
        / total;

    ScoreBreakdown {
        topic_match: topic_component,
        popularity_share: 1.0 - confidence,
        type_affinity,
        reading_fit: fit,
        level_mismatch: mismatch,
        final_score: final_score.clamp(0.0, 1.0),
    }
}

/// Preference-weighted topic match mapped onto [0.0, 1.0].
///
/// Per topic: `min(profileWeight, 1) × contentTopicScore`, averaged over
/// the content's topic mass. Items with no topic scores are neutral.
fn topic_match(profile: &UserProfile, item: &ContentItem) -> f64 {
    let mass: f64 = item.topic_scores.values().sum();
    if mass <= 0.0 {
        return 0.5;
    }
    let weighted: f64 = item
        .topic_scores
        .iter()
        .map(|(topic, score)| {
            let weight = profile
                .topic_preferences
                .get(topic)
                .map(|p| p.weight.value().min(1.0))
                .unwrap_or(0.0);
            weight * score
        })
        .sum();
    // weighted/mass ∈ [-1, 1] → [0, 1].
    ((weighted / mass) + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tailor_core::profile::preference::TopicPreference;

    fn profile_with(topic: &str, weight: f64, confidence: f64) -> UserProfile {
        let now = Utc::now();
        let mut p = UserProfile::new("u1", now);
        let mut pref = TopicPreference::neutral(now);
        pref.weight = weight.into();
        pref.confidence = confidence.into();
        p.topic_preferences.insert(topic.to_string(), pref);
        p
    }

    fn item_with(topic: &str, topic_score: f64) -> ContentItem {
        ContentItem {
            id: "c1".to_string(),
            language: tailor_core::profile::Language::English,
            topic_scores: [(topic.to_string(), topic_score)].into_iter().collect(),
            content_type: "article".to_string(),
            reading_level_score: 2.0,
            embedding: vec![],
            estimated_reading_time_min: 10,
            popularity: 0.2,
            tags: vec![],
        }
    }

    #[test]
    fn identical_inputs_identical_output() {
        let config = ScoringConfig::default();
        let profile = profile_with("scifi", 0.8, 0.9);
        let item = item_with("scifi", 0.9);
        assert_eq!(
            score(&profile, &item, &config),
            score(&profile, &item, &config)
        );
    }

    #[test]
    fn liked_topic_scores_higher_than_disliked() {
        let config = ScoringConfig::default();
        let liked = profile_with("scifi", 0.8, 0.9);
        let disliked = profile_with("scifi", -0.8, 0.9);
        let item = item_with("scifi", 0.9);
        assert!(score(&liked, &item, &config) > score(&disliked, &item, &config));
    }

    #[test]
    fn cold_profile_leans_on_popularity() {
        let config = ScoringConfig::default();
        let cold = UserProfile::new("u1", Utc::now());
        let mut popular = item_with("scifi", 0.9);
        popular.popularity = 0.95;
        let mut obscure = item_with("scifi", 0.9);
        obscure.popularity = 0.05;
        assert!(score(&cold, &popular, &config) > score(&cold, &obscure, &config));
    }

    #[test]
    fn breakdown_marks_mismatch() {
        let config = ScoringConfig::default();
        let profile = profile_with("scifi", 0.5, 0.8);
        let mut item = item_with("scifi", 0.9);
        item.reading_level_score = 4.0; // Advanced vs default Intermediate.
        let breakdown = score_breakdown(&profile, &item, &config);
        assert!(breakdown.level_mismatch);
    }

    #[test]
    fn explanation_orders_factors_by_contribution() {
        let config = ScoringConfig::default();
        let profile = profile_with("scifi", 0.9, 1.0);
        let item = item_with("scifi", 1.0);
        let explanation = score_breakdown(&profile, &item, &config).explanation(&item, &config);
        let contributions: Vec<f64> =
            explanation.factors.iter().map(|f| f.contribution).collect();
        assert!(contributions.windows(2).all(|w| w[0] >= w[1]));
    }
}
