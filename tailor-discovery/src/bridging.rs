//! Bridging topics: the shared or adjacent concepts that justify a
//! divergent pick to the user.

use tailor_core::config::DiscoveryConfig;
use tailor_core::content::ContentItem;
use tailor_core::profile::UserProfile;

/// Topics connecting the candidate to the user's existing preferences,
/// strongest connection first.
///
/// Primary path: topics both sides share (user weight × content score).
/// Fallback when nothing is shared: the user's strongest interest, so
/// the generated reason can still anchor on something familiar.
pub fn bridging_topics(
    profile: &UserProfile,
    item: &ContentItem,
    config: &DiscoveryConfig,
) -> Vec<String> {
    let mut shared: Vec<(String, f64)> = item
        .topic_scores
        .iter()
        .filter_map(|(topic, score)| {
            let weight = profile.topic_preferences.get(topic)?.weight.positive();
            if weight > 0.1 && *score > 0.05 {
                Some((topic.clone(), weight * score))
            } else {
                None
            }
        })
        .collect();

    shared.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    if !shared.is_empty() {
        return shared
            .into_iter()
            .take(config.max_bridging_topics)
            .map(|(t, _)| t)
            .collect();
    }

    // No shared topic: anchor on the user's strongest interest.
    strongest_interest(profile).into_iter().collect()
}

/// Human-readable reason for a discovery pick.
pub fn reason(item: &ContentItem, bridging: &[String]) -> String {
    let destination = item.dominant_topic().unwrap_or("something new");
    match bridging {
        [] => format!("a change of pace: {destination}"),
        [single] => format!("branches out from your interest in {single} into {destination}"),
        [first, rest @ ..] => {
            let others = rest.join(", ");
            format!(
                "connects your interests in {first} and {others} to {destination}"
            )
        }
    }
}

fn strongest_interest(profile: &UserProfile) -> Option<String> {
    profile
        .topic_preferences
        .iter()
        .filter(|(_, p)| p.weight.positive() > 0.2)
        .max_by(|a, b| {
            a.1.weight
                .value()
                .partial_cmp(&b.1.weight.value())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(t, _)| t.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{make_item, make_profile};

    #[test]
    fn shared_topics_bridge_first() {
        let config = DiscoveryConfig::default();
        let profile = make_profile("u1", &[("science", 0.8, 0.9), ("scifi", 0.9, 0.9)]);
        let item = make_item("c1", &[("gardening", 0.8), ("science", 0.3)]);
        let bridges = bridging_topics(&profile, &item, &config);
        assert_eq!(bridges, vec!["science".to_string()]);
    }

    #[test]
    fn no_shared_topic_falls_back_to_strongest_interest() {
        let config = DiscoveryConfig::default();
        let profile = make_profile("u1", &[("scifi", 0.9, 0.9)]);
        let item = make_item("c1", &[("gardening", 0.9)]);
        let bridges = bridging_topics(&profile, &item, &config);
        assert_eq!(bridges, vec!["scifi".to_string()]);
    }

    #[test]
    fn reason_names_bridge_and_destination() {
        let item = make_item("c1", &[("gardening", 0.9)]);
        let text = reason(&item, &["science".to_string()]);
        assert!(text.contains("science"));
        assert!(text.contains("gardening"));
    }
}
