//! Shared builders for integration tests across the workspace:
//! profiles, content items, and feedback events with sensible defaults.

use chrono::{DateTime, Duration, Utc};

use tailor_core::content::ContentItem;
use tailor_core::feedback::{FeedbackEvent, FeedbackSignal};
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::reading::{Language, ReadingAbility, ReadingLevel};
use tailor_core::profile::{Confidence, UserProfile, Weight};

/// Profile with the given `(topic, weight, confidence)` triples and
/// enough folded events to clear cold start.
pub fn make_profile(user_id: &str, topics: &[(&str, f64, f64)]) -> UserProfile {
    let now = Utc::now();
    let mut profile = UserProfile::new(user_id, now);
    for (topic, weight, confidence) in topics {
        profile.topic_preferences.insert(
            topic.to_string(),
            TopicPreference {
                weight: Weight::new(*weight),
                confidence: Confidence::new(*confidence),
                last_updated: now,
                trend: Default::default(),
                manual_override: false,
            },
        );
    }
    profile.event_count = 20;
    profile
}

/// Set a profile's reading ability for one language.
pub fn with_reading_level(
    mut profile: UserProfile,
    language: Language,
    level: ReadingLevel,
    confidence: f64,
) -> UserProfile {
    profile.reading_levels.insert(
        language,
        ReadingAbility {
            level,
            confidence: Confidence::new(confidence),
            speed_baseline_wpm: None,
        },
    );
    profile
}

/// English content item with the given topic scores.
pub fn make_item(id: &str, topics: &[(&str, f64)]) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        language: Language::English,
        topic_scores: topics.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
        content_type: "article".to_string(),
        reading_level_score: ReadingLevel::Intermediate.as_score(),
        embedding: Vec::new(),
        estimated_reading_time_min: 15,
        popularity: 0.5,
        tags: Vec::new(),
    }
}

/// `make_item` plus reading time, level score, and popularity.
pub fn make_item_full(
    id: &str,
    topics: &[(&str, f64)],
    minutes: u32,
    level_score: f64,
    popularity: f64,
) -> ContentItem {
    let mut item = make_item(id, topics);
    item.estimated_reading_time_min = minutes;
    item.reading_level_score = level_score;
    item.popularity = popularity;
    item
}

/// Explicit rating event, `days_ago` in the past.
pub fn make_rating(user_id: &str, content_id: &str, rating: f64, days_ago: i64) -> FeedbackEvent {
    FeedbackEvent::new(
        user_id,
        content_id,
        FeedbackSignal::Explicit { rating, note: None },
        days_ago_ts(days_ago),
    )
}

/// Implicit completion event, `days_ago` in the past.
pub fn make_completion(
    user_id: &str,
    content_id: &str,
    completion_rate: f64,
    days_ago: i64,
) -> FeedbackEvent {
    FeedbackEvent::new(
        user_id,
        content_id,
        FeedbackSignal::Implicit {
            completion_rate,
            reading_speed_ratio: None,
            pause_count: 0,
            return_visit: false,
        },
        days_ago_ts(days_ago),
    )
}

fn days_ago_ts(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}
