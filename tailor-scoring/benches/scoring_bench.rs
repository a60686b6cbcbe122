use criterion::{criterion_group, criterion_main, Criterion};

use chrono::Utc;
use tailor_core::config::ScoringConfig;
use tailor_core::content::ContentItem;
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::{Language, UserProfile};
use tailor_scoring::score_pool;

fn make_pool(n: usize) -> Vec<ContentItem> {
    let topics = ["scifi", "mystery", "history", "science", "poetry"];
    (0..n)
        .map(|i| ContentItem {
            id: format!("c{i}"),
            language: Language::English,
            topic_scores: topics
                .iter()
                .enumerate()
                .map(|(j, t)| (t.to_string(), ((i + j) % 10) as f64 / 10.0))
                .collect(),
            content_type: "article".to_string(),
            reading_level_score: (i % 5) as f64,
            embedding: vec![0.1; 128],
            estimated_reading_time_min: 5 + (i % 40) as u32,
            popularity: (i % 100) as f64 / 100.0,
            tags: vec![],
        })
        .collect()
}

fn make_profile() -> UserProfile {
    let now = Utc::now();
    let mut profile = UserProfile::new("bench", now);
    for (topic, weight) in [("scifi", 0.8), ("mystery", 0.3), ("poetry", -0.5)] {
        let mut pref = TopicPreference::neutral(now);
        pref.weight = weight.into();
        pref.confidence = 0.9.into();
        profile.topic_preferences.insert(topic.to_string(), pref);
    }
    profile
}

fn bench_score_pool(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let profile = make_profile();
    let pool = make_pool(1000);

    c.bench_function("score_pool_1000", |b| {
        b.iter(|| score_pool(&profile, &pool, &config))
    });
}

criterion_group!(benches, bench_score_pool);
criterion_main!(benches);
