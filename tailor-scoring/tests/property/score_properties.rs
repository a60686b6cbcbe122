use proptest::prelude::*;

use chrono::Utc;
use tailor_core::config::ScoringConfig;
use tailor_core::content::ContentItem;
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::{Language, UserProfile};
use tailor_scoring::score;

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    prop::collection::vec(("[a-z]{3,8}", -1.0f64..1.0, 0.0f64..1.0), 0..6).prop_map(|topics| {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        for (topic, weight, confidence) in topics {
            let mut pref = TopicPreference::neutral(now);
            pref.weight = weight.into();
            pref.confidence = confidence.into();
            profile.topic_preferences.insert(topic, pref);
        }
        profile.event_count = profile.topic_preferences.len() as u64 * 3;
        profile
    })
}

fn arb_item() -> impl Strategy<Value = ContentItem> {
    (
        prop::collection::hash_map("[a-z]{3,8}", 0.0f64..1.0, 0..6),
        0.0f64..4.0,
        0.0f64..1.0,
        1u32..240,
    )
        .prop_map(|(topic_scores, level, popularity, minutes)| ContentItem {
            id: "c1".to_string(),
            language: Language::English,
            topic_scores,
            content_type: "article".to_string(),
            reading_level_score: level,
            embedding: vec![],
            estimated_reading_time_min: minutes,
            popularity,
            tags: vec![],
        })
}

proptest! {
    // ── score(P, C) ∈ [0, 1] for all profiles and content ────────────────

    #[test]
    fn score_always_in_unit_interval(profile in arb_profile(), item in arb_item()) {
        let config = ScoringConfig::default();
        let s = score(&profile, &item, &config);
        prop_assert!((0.0..=1.0).contains(&s), "score out of bounds: {}", s);
    }

    // ── Determinism: same inputs, same output ────────────────────────────

    #[test]
    fn score_is_deterministic(profile in arb_profile(), item in arb_item()) {
        let config = ScoringConfig::default();
        prop_assert_eq!(
            score(&profile, &item, &config).to_bits(),
            score(&profile, &item, &config).to_bits()
        );
    }
}
