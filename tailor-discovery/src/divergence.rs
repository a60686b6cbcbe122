//! Divergence scoring: topical dissimilarity blended with a
//! content-type novelty term.

use tailor_core::config::DiscoveryConfig;
use tailor_core::content::ContentItem;
use tailor_core::profile::UserProfile;

/// Topic overlap in [0.0, 1.0]: how much of the content's topic mass
/// lands on topics the user already positively weights.
pub fn topic_overlap(profile: &UserProfile, item: &ContentItem) -> f64 {
    let mass: f64 = item.topic_scores.values().sum();
    if mass <= 0.0 {
        return 0.0;
    }
    let covered: f64 = item
        .topic_scores
        .iter()
        .map(|(topic, score)| {
            let weight = profile
                .topic_preferences
                .get(topic)
                .map(|p| p.weight.positive())
                .unwrap_or(0.0);
            weight * score
        })
        .sum();
    (covered / mass).clamp(0.0, 1.0)
}

/// Divergence in [0.0, 1.0]: `1 − topicOverlap`, pulled further up for
/// content types the user has never tried.
pub fn divergence_score(
    profile: &UserProfile,
    item: &ContentItem,
    config: &DiscoveryConfig,
) -> f64 {
    let topical = 1.0 - topic_overlap(profile, item);
    let novelty = if profile.type_affinities.contains_key(&item.content_type) {
        0.0
    } else {
        1.0
    };
    ((1.0 - config.novelty_weight) * topical + config.novelty_weight * novelty).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{make_item, make_profile};

    #[test]
    fn fully_covered_content_has_low_divergence() {
        let config = DiscoveryConfig::default();
        let mut profile = make_profile("u1", &[("scifi", 1.0, 0.9)]);
        // Mark the type as tried so novelty does not contribute.
        profile.type_affinities.insert(
            "article".to_string(),
            profile.topic_preferences["scifi"].clone(),
        );
        let item = make_item("c1", &[("scifi", 0.9)]);
        assert!(divergence_score(&profile, &item, &config) < 0.1);
    }

    #[test]
    fn unknown_topic_has_high_divergence() {
        let config = DiscoveryConfig::default();
        let profile = make_profile("u1", &[("scifi", 0.9, 0.9)]);
        let item = make_item("c1", &[("gardening", 0.9)]);
        assert!(divergence_score(&profile, &item, &config) > 0.7);
    }

    #[test]
    fn disliked_topics_count_as_unexplored_mass() {
        let config = DiscoveryConfig::default();
        let averse = make_profile("u1", &[("horror", -0.9, 0.9)]);
        let item = make_item("c1", &[("horror", 0.9)]);
        // Negative weight contributes no overlap.
        assert!(divergence_score(&averse, &item, &config) > 0.7);
    }
}
