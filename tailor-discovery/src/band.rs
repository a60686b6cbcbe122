//! The divergence band: acceptance window for discovery candidates.
//!
//! Too little divergence is not discovery; too much is incompatible by
//! design. The user's accumulated discovery-openness weight (fed by
//! their responses through the feedback processor) widens or narrows
//! the configured base band.

use tailor_core::config::DiscoveryConfig;
use tailor_core::models::context::ContextFactor;
use tailor_core::profile::UserProfile;

/// An inclusive divergence acceptance window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceBand {
    pub min: f64,
    pub max: f64,
}

impl DivergenceBand {
    /// The base band from config, adapted by the user's openness.
    /// Positive openness (accepted discoveries) widens both edges
    /// outward; negative (repeated rejections) narrows them.
    pub fn for_profile(profile: &UserProfile, config: &DiscoveryConfig) -> Self {
        let openness = profile
            .contextual_weight(ContextFactor::DiscoveryOpenness)
            .value();
        let shift = openness * config.openness_band_scale;

        let min = (config.min_divergence - shift).clamp(0.0, 1.0);
        let max = (config.max_divergence + shift).clamp(0.0, 1.0);
        // A fully closed-down band still accepts the base minimum edge.
        if min > max {
            let mid = (config.min_divergence + config.max_divergence) / 2.0;
            return Self { min: mid, max: mid };
        }
        Self { min, max }
    }

    pub fn contains(&self, divergence: f64) -> bool {
        (self.min..=self.max).contains(&divergence)
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tailor_core::profile::{UserProfile, Weight};

    fn profile_with_openness(openness: f64) -> UserProfile {
        let mut profile = UserProfile::new("u1", Utc::now());
        profile
            .contextual_preferences
            .insert(ContextFactor::DiscoveryOpenness, Weight::new(openness));
        profile
    }

    #[test]
    fn neutral_openness_keeps_base_band() {
        let config = DiscoveryConfig::default();
        let band = DivergenceBand::for_profile(&profile_with_openness(0.0), &config);
        assert_eq!(band.min, config.min_divergence);
        assert_eq!(band.max, config.max_divergence);
    }

    #[test]
    fn acceptance_widens_the_band() {
        let config = DiscoveryConfig::default();
        let open = DivergenceBand::for_profile(&profile_with_openness(1.0), &config);
        assert!(open.min < config.min_divergence);
        assert!(open.max > config.max_divergence);
    }

    #[test]
    fn rejection_narrows_the_band() {
        let config = DiscoveryConfig::default();
        let closed = DivergenceBand::for_profile(&profile_with_openness(-1.0), &config);
        assert!(closed.min > config.min_divergence);
        assert!(closed.max < config.max_divergence);
    }
}
