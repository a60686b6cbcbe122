use proptest::prelude::*;

use chrono::Utc;
use tailor_core::config::{DiscoveryConfig, ScoringConfig};
use tailor_core::content::ContentItem;
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::{Language, UserProfile};
use tailor_discovery::{DiscoveryEngine, DivergenceBand};
use tailor_scoring::reading_fit;

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    prop::collection::vec(("[a-z]{3,6}", -1.0f64..1.0, 0.0f64..1.0), 1..5).prop_map(|topics| {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        for (topic, weight, confidence) in topics {
            let mut pref = TopicPreference::neutral(now);
            pref.weight = weight.into();
            pref.confidence = confidence.into();
            profile.topic_preferences.insert(topic, pref);
        }
        profile.event_count = 30;
        profile
    })
}

fn arb_pool() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(
        (
            prop::collection::hash_map("[a-z]{3,6}", 0.0f64..1.0, 1..4),
            0.0f64..4.0,
            0.0f64..1.0,
        ),
        1..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (topic_scores, level, popularity))| ContentItem {
                id: format!("c{i}"),
                language: Language::English,
                topic_scores,
                content_type: "article".to_string(),
                reading_level_score: level,
                embedding: vec![],
                estimated_reading_time_min: 15,
                popularity,
                tags: vec![],
            })
            .collect()
    })
}

proptest! {
    // ── Every pick honors the band and the accessibility threshold ───────

    #[test]
    fn picks_respect_band_and_accessibility(profile in arb_profile(), pool in arb_pool()) {
        let discovery_config = DiscoveryConfig::default();
        let scoring_config = ScoringConfig::default();
        let engine = DiscoveryEngine::new(discovery_config.clone(), scoring_config.clone());

        let outcome = engine.discover(&profile, &pool, 10);
        let band = DivergenceBand::for_profile(&profile, &discovery_config);

        for rec in &outcome.recommendations {
            let item = pool.iter().find(|i| i.id == rec.content_id).unwrap();

            let ability = profile.reading_ability(&item.language);
            let fit = reading_fit::fit(ability.level, item.reading_level_score, &scoring_config);
            prop_assert!(
                fit >= discovery_config.accessibility_threshold,
                "inaccessible pick {}: fit {}",
                rec.content_id,
                fit
            );

            if !outcome.exploratory {
                prop_assert!(
                    band.contains(rec.divergence_score),
                    "pick {} outside band [{}, {}]: {}",
                    rec.content_id,
                    band.min,
                    band.max,
                    rec.divergence_score
                );
            }
        }
    }
}
