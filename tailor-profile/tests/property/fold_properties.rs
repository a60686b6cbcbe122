use chrono::{Duration, Utc};
use proptest::prelude::*;

use tailor_core::config::FeedbackConfig;
use tailor_core::feedback::{FeedbackEvent, FeedbackSignal};
use tailor_core::profile::UserProfile;
use tailor_profile::FeedbackProcessor;
use test_fixtures::make_item;

/// Tolerance for order effects in the fold. The update is an
/// exponentially-smoothed pull toward each event's delta, so different
/// orders differ by O(learningRate²) per pair of events; the
/// confidence gate adds a further second-order term.
const ORDER_EPSILON: f64 = 0.08;

fn small_rate_config() -> FeedbackConfig {
    FeedbackConfig {
        learning_rate: 0.05,
        ..FeedbackConfig::default()
    }
}

fn arb_ratings() -> impl Strategy<Value = Vec<(f64, i64)>> {
    // (rating, days_ago) pairs.
    prop::collection::vec((-1.0f64..1.0, 0i64..60), 2..6)
}

proptest! {
    // ── Same multiset of events, two orders → weights within ε ──────────

    #[test]
    fn fold_is_order_independent_within_tolerance(
        ratings in arb_ratings(),
        seed in 0usize..1000,
    ) {
        let processor = FeedbackProcessor::new(small_rate_config());
        let item = make_item("c1", &[("scifi", 0.8)]);
        let now = Utc::now();

        let events: Vec<FeedbackEvent> = ratings
            .iter()
            .map(|(rating, days_ago)| {
                FeedbackEvent::new(
                    "u1",
                    "c1",
                    FeedbackSignal::Explicit { rating: *rating, note: None },
                    now - Duration::days(*days_ago),
                )
            })
            .collect();

        // Deterministic permutation derived from the seed.
        let mut permuted = events.clone();
        for i in (1..permuted.len()).rev() {
            permuted.swap(i, (seed * 31 + i * 7) % (i + 1));
        }

        let mut forward = UserProfile::new("u1", now);
        for e in &events {
            processor.apply(&mut forward, e, Some(&item), now);
        }

        let mut shuffled = UserProfile::new("u1", now);
        for e in &permuted {
            processor.apply(&mut shuffled, e, Some(&item), now);
        }

        let a = forward.topic_preferences["scifi"].weight.value();
        let b = shuffled.topic_preferences["scifi"].weight.value();
        prop_assert!(
            (a - b).abs() <= ORDER_EPSILON,
            "order changed weight beyond tolerance: {} vs {}",
            a,
            b
        );
    }

    // ── Weight and confidence always stay in bounds ──────────────────────

    #[test]
    fn fold_preserves_bounds(ratings in arb_ratings()) {
        let processor = FeedbackProcessor::new(FeedbackConfig::default());
        let item = make_item("c1", &[("scifi", 1.0)]);
        let now = Utc::now();

        let mut profile = UserProfile::new("u1", now);
        for (rating, days_ago) in &ratings {
            let event = FeedbackEvent::new(
                "u1",
                "c1",
                FeedbackSignal::Explicit { rating: *rating, note: None },
                now - Duration::days(*days_ago),
            );
            processor.apply(&mut profile, &event, Some(&item), now);
        }

        let pref = &profile.topic_preferences["scifi"];
        prop_assert!((-1.0..=1.0).contains(&pref.weight.value()));
        prop_assert!((0.0..=1.0).contains(&pref.confidence.value()));
    }
}
