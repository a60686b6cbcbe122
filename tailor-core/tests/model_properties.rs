use proptest::prelude::*;

use std::collections::HashMap;

use chrono::Utc;
use tailor_core::profile::snapshot::{PreferenceSnapshot, SnapshotTrigger};
use tailor_core::profile::{Confidence, Weight};

fn snapshot(weights: HashMap<String, f64>) -> PreferenceSnapshot {
    PreferenceSnapshot {
        id: "s".to_string(),
        timestamp: Utc::now(),
        weights,
        aggregate_confidence: 0.5,
        event_count: 0,
        trigger: SnapshotTrigger::Manual,
    }
}

proptest! {
    #[test]
    fn weight_always_clamped(value in -100.0f64..100.0) {
        let w = Weight::new(value);
        prop_assert!((-1.0..=1.0).contains(&w.value()));
    }

    #[test]
    fn confidence_always_clamped(value in -100.0f64..100.0) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn snapshot_distance_symmetric_and_nonnegative(
        a in prop::collection::hash_map("[a-z]{3,6}", -1.0f64..1.0, 0..6),
        b in prop::collection::hash_map("[a-z]{3,6}", -1.0f64..1.0, 0..6),
    ) {
        let sa = snapshot(a);
        let sb = snapshot(b);
        let d_ab = sa.distance(&sb);
        let d_ba = sb.distance(&sa);
        prop_assert!(d_ab >= 0.0);
        prop_assert!((d_ab - d_ba).abs() < 1e-9);
    }
}
