//! Context inference: when a request carries no context, reconstruct
//! the user's most likely one from the historical interaction
//! distribution — but only once there is enough history to trust.

use std::collections::HashMap;

use tracing::debug;

use tailor_core::config::RecommendConfig;
use tailor_core::feedback::event::FeedbackEvent;
use tailor_core::models::context::RequestContext;

/// Most frequent time-of-day/device/mood buckets over the recent
/// events. Returns `None` when fewer than `min_context_samples` events
/// carry any context — the caller then uses neutral context and flags
/// the response uncontextualized.
pub fn infer_context(events: &[FeedbackEvent], config: &RecommendConfig) -> Option<RequestContext> {
    let contexts: Vec<&RequestContext> = events
        .iter()
        .take(config.context_history_window)
        .filter_map(|e| e.context.as_ref())
        .filter(|c| !c.is_empty())
        .collect();

    if contexts.len() < config.min_context_samples {
        debug!(
            samples = contexts.len(),
            required = config.min_context_samples,
            "not enough history to infer context"
        );
        return None;
    }

    let time_of_day = most_frequent(contexts.iter().filter_map(|c| c.time_of_day));
    let device = most_frequent(contexts.iter().filter_map(|c| c.device));
    let mood = most_frequent(contexts.iter().filter_map(|c| c.mood));

    Some(RequestContext {
        time_of_day,
        device,
        mood,
        location: None,
        available_time_min: None,
    })
}

/// Argmax over bucket counts; ties break on the bucket's debug name so
/// inference is deterministic.
fn most_frequent<T: Copy + Eq + std::hash::Hash + std::fmt::Debug>(
    values: impl Iterator<Item = T>,
) -> Option<T> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| format!("{:?}", b.0).cmp(&format!("{:?}", a.0)))
        })
        .map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tailor_core::feedback::FeedbackSignal;
    use tailor_core::models::context::{DeviceType, TimeOfDay};

    fn event_with_context(time: TimeOfDay, device: DeviceType) -> FeedbackEvent {
        FeedbackEvent::new(
            "u1",
            "c1",
            FeedbackSignal::Categorical { liked: true },
            Utc::now(),
        )
        .with_context(RequestContext {
            time_of_day: Some(time),
            device: Some(device),
            ..Default::default()
        })
    }

    #[test]
    fn too_little_history_returns_none() {
        let config = RecommendConfig::default();
        let events = vec![event_with_context(TimeOfDay::Morning, DeviceType::Mobile)];
        assert!(infer_context(&events, &config).is_none());
    }

    #[test]
    fn majority_bucket_wins() {
        let config = RecommendConfig {
            min_context_samples: 3,
            ..RecommendConfig::default()
        };
        let events = vec![
            event_with_context(TimeOfDay::Evening, DeviceType::EReader),
            event_with_context(TimeOfDay::Evening, DeviceType::EReader),
            event_with_context(TimeOfDay::Evening, DeviceType::Mobile),
            event_with_context(TimeOfDay::Morning, DeviceType::EReader),
        ];
        let inferred = infer_context(&events, &config).unwrap();
        assert_eq!(inferred.time_of_day, Some(TimeOfDay::Evening));
        assert_eq!(inferred.device, Some(DeviceType::EReader));
    }
}
