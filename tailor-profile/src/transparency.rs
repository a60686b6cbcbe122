//! Preference transparency: a human-readable account of how each topic
//! weight was derived.

use tailor_core::models::transparency::{PreferenceTransparency, TopicDerivation};
use tailor_core::profile::preference::Trend;
use tailor_core::profile::UserProfile;

/// Build a transparency report, strongest weights first.
pub fn report(profile: &UserProfile) -> PreferenceTransparency {
    let mut topics: Vec<TopicDerivation> = profile
        .topic_preferences
        .iter()
        .map(|(topic, pref)| TopicDerivation {
            topic: topic.clone(),
            weight: pref.weight.value(),
            confidence: pref.confidence.value(),
            trend: pref.trend,
            manual_override: pref.manual_override,
            explanation: explain(topic, pref.weight.value(), pref.confidence.value(), pref.trend, pref.manual_override),
        })
        .collect();

    topics.sort_by(|a, b| {
        b.weight
            .abs()
            .partial_cmp(&a.weight.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.topic.cmp(&b.topic))
    });

    PreferenceTransparency {
        user_id: profile.user_id.clone(),
        topics,
        aggregate_confidence: profile.aggregate_confidence(),
        event_count: profile.event_count,
    }
}

fn explain(topic: &str, weight: f64, confidence: f64, trend: Trend, overridden: bool) -> String {
    if overridden {
        return format!("'{topic}' was set manually and is excluded from automatic updates");
    }
    let strength = match weight {
        w if w >= 0.6 => "strong interest in",
        w if w >= 0.2 => "moderate interest in",
        w if w > -0.2 => "no clear signal on",
        w if w > -0.6 => "moderate dislike of",
        _ => "strong dislike of",
    };
    let reliability = match confidence {
        c if c >= 0.8 => "well established",
        c if c >= 0.5 => "reasonably consistent",
        _ => "still tentative",
    };
    let direction = match trend {
        Trend::Increasing => ", and growing",
        Trend::Decreasing => ", and fading",
        Trend::Stable => "",
    };
    format!("{strength} '{topic}' ({reliability} from reading behavior{direction})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tailor_core::profile::preference::TopicPreference;

    #[test]
    fn strongest_weight_listed_first() {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        let mut mild = TopicPreference::neutral(now);
        mild.weight = 0.2.into();
        let mut strong = TopicPreference::neutral(now);
        strong.weight = (-0.9).into();
        profile.topic_preferences.insert("essays".into(), mild);
        profile.topic_preferences.insert("horror".into(), strong);

        let report = report(&profile);
        assert_eq!(report.topics[0].topic, "horror");
    }

    #[test]
    fn override_explained_as_manual() {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        profile
            .topic_preferences
            .insert("scifi".into(), TopicPreference::overridden(0.9, now));
        let report = report(&profile);
        assert!(report.topics[0].explanation.contains("manually"));
    }
}
