use chrono::{Duration, Utc};

use tailor_core::config::EvolutionConfig;
use tailor_core::profile::preference::Trend;
use tailor_core::profile::snapshot::SnapshotTrigger;
use tailor_evolution::EvolutionTracker;
use test_fixtures::make_profile;

// ── Triggers ─────────────────────────────────────────────────────────────

#[test]
fn first_tick_snapshots_once_events_exist() {
    let tracker = EvolutionTracker::default();
    let mut profile = make_profile("u1", &[("scifi", 0.5, 0.7)]);
    let now = Utc::now();

    assert!(tracker.tick(&mut profile, now).is_some());
    assert_eq!(profile.evolution_history.len(), 1);

    // Immediately after, nothing is due.
    assert!(tracker.tick(&mut profile, now).is_none());
}

#[test]
fn event_count_trigger_fires_after_n_folds() {
    let config = EvolutionConfig {
        snapshot_every_events: 5,
        ..EvolutionConfig::default()
    };
    let tracker = EvolutionTracker::new(config);
    let mut profile = make_profile("u1", &[("scifi", 0.5, 0.7)]);
    let now = Utc::now();

    tracker.tick(&mut profile, now);
    profile.event_count += 5;
    assert!(tracker.tick(&mut profile, now).is_some());
    assert_eq!(profile.evolution_history.len(), 2);
}

#[test]
fn periodic_trigger_fires_after_interval() {
    let tracker = EvolutionTracker::default();
    let mut profile = make_profile("u1", &[("scifi", 0.5, 0.7)]);
    let now = Utc::now();

    tracker.tick(&mut profile, now);
    let later = now + Duration::hours(25);
    assert!(tracker.tick(&mut profile, later).is_some());
}

// ── Shift detection ──────────────────────────────────────────────────────

#[test]
fn large_move_flags_shift_with_responsible_topics() {
    let tracker = EvolutionTracker::default();
    let mut profile = make_profile("u1", &[("scifi", 0.9, 0.9), ("poetry", 0.1, 0.5)]);
    let now = Utc::now();
    tracker.snapshot(&mut profile, SnapshotTrigger::Manual, now);

    // Interest collapses and migrates.
    profile.topic_preferences.get_mut("scifi").unwrap().weight = (-0.4).into();
    profile.topic_preferences.get_mut("poetry").unwrap().weight = 0.8.into();

    let report = tracker.snapshot(&mut profile, SnapshotTrigger::Manual, now);
    assert!(report.shifted);
    assert_eq!(report.responsible_topics[0].0, "scifi");
}

#[test]
fn small_move_does_not_flag_shift() {
    let tracker = EvolutionTracker::default();
    let mut profile = make_profile("u1", &[("scifi", 0.5, 0.9)]);
    let now = Utc::now();
    tracker.snapshot(&mut profile, SnapshotTrigger::Manual, now);

    profile.topic_preferences.get_mut("scifi").unwrap().weight = 0.55.into();
    let report = tracker.snapshot(&mut profile, SnapshotTrigger::Manual, now);
    assert!(!report.shifted);
}

// ── Trends ───────────────────────────────────────────────────────────────

#[test]
fn steady_growth_marks_topic_increasing() {
    let tracker = EvolutionTracker::default();
    let mut profile = make_profile("u1", &[("scifi", 0.1, 0.7)]);
    let now = Utc::now();

    for step in 1..=4 {
        profile.topic_preferences.get_mut("scifi").unwrap().weight = (0.1 + 0.2 * step as f64).into();
        tracker.snapshot(&mut profile, SnapshotTrigger::Manual, now);
    }

    assert_eq!(profile.topic_preferences["scifi"].trend, Trend::Increasing);
}
