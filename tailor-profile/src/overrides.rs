//! Manual preference overrides. An override always wins over automatic
//! updates and is excluded from folds until explicitly reset.

use chrono::{DateTime, Utc};
use tracing::info;

use tailor_core::errors::{ProfileError, TailorResult};
use tailor_core::profile::preference::TopicPreference;
use tailor_core::profile::UserProfile;

/// Pin a topic weight. The preference is marked `manual_override` and
/// the fold skips it from then on.
pub fn apply(profile: &mut UserProfile, topic: &str, value: f64, now: DateTime<Utc>) {
    info!(user_id = %profile.user_id, topic, value, "manual override applied");
    profile
        .topic_preferences
        .insert(topic.to_string(), TopicPreference::overridden(value, now));
    profile.updated_at = now;
}

/// Release an override, returning the topic to automatic learning with
/// cold confidence so new evidence re-establishes it.
pub fn reset(profile: &mut UserProfile, topic: &str, now: DateTime<Utc>) -> TailorResult<()> {
    match profile.topic_preferences.get_mut(topic) {
        Some(pref) if pref.manual_override => {
            info!(user_id = %profile.user_id, topic, "manual override reset");
            *pref = TopicPreference::neutral(now);
            profile.updated_at = now;
            Ok(())
        }
        _ => Err(ProfileError::NoSuchOverride {
            user_id: profile.user_id.clone(),
            topic: topic.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_then_reset() {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        apply(&mut profile, "scifi", -0.7, now);
        assert!(profile.topic_preferences["scifi"].manual_override);
        assert_eq!(profile.topic_preferences["scifi"].weight.value(), -0.7);

        reset(&mut profile, "scifi", now).unwrap();
        assert!(!profile.topic_preferences["scifi"].manual_override);
    }

    #[test]
    fn reset_without_override_fails() {
        let now = Utc::now();
        let mut profile = UserProfile::new("u1", now);
        assert!(reset(&mut profile, "scifi", now).is_err());
    }
}
