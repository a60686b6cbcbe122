//! DiscoveryEngine — selects accessible content outside the explored
//! set, inside the adapted divergence band.

use tracing::{debug, info};

use tailor_core::config::{DiscoveryConfig, ScoringConfig};
use tailor_core::content::ContentItem;
use tailor_core::models::discovery::DiscoveryRecommendation;
use tailor_core::profile::UserProfile;
use tailor_scoring::reading_fit;

use crate::band::DivergenceBand;
use crate::bridging;
use crate::divergence;

/// Discovery picks plus the flags the caller folds into its response.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOutcome {
    pub recommendations: Vec<DiscoveryRecommendation>,
    /// Cold-start path: no explored topics yet, so no divergence-band
    /// filtering was applied — only the accessibility gate.
    pub exploratory: bool,
}

/// The discovery selection engine. Pure over its inputs.
pub struct DiscoveryEngine {
    config: DiscoveryConfig,
    scoring: ScoringConfig,
}

impl DiscoveryEngine {
    pub fn new(config: DiscoveryConfig, scoring: ScoringConfig) -> Self {
        Self { config, scoring }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Select up to `limit` discovery recommendations from `pool`.
    pub fn discover(
        &self,
        profile: &UserProfile,
        pool: &[ContentItem],
        limit: usize,
    ) -> DiscoveryOutcome {
        let explored = profile.explored_topics(self.config.explored_confidence);

        if explored.is_empty() {
            // Brand-new user: everything is undiscovered. Gate on
            // accessibility only and lead with popular items.
            return self.cold_start(profile, pool, limit);
        }

        let band = DivergenceBand::for_profile(profile, &self.config);
        debug!(min = band.min, max = band.max, "divergence band");

        let mut scored: Vec<(&ContentItem, f64, f64)> = pool
            .iter()
            .filter(|item| {
                item.dominant_topic()
                    .map(|t| !explored.contains(&t))
                    .unwrap_or(false)
            })
            .filter_map(|item| {
                let fit = self.accessibility(profile, item);
                if fit < self.config.accessibility_threshold {
                    return None;
                }
                let div = divergence::divergence_score(profile, item, &self.config);
                if !band.contains(div) {
                    return None;
                }
                Some((item, div, fit))
            })
            .collect();

        // Most promising first: comfortable to read and close to the
        // middle of the band, with ids as a deterministic tie-break.
        scored.sort_by(|a, b| {
            let quality_a = a.2 * (1.0 - (a.1 - band.center()).abs());
            let quality_b = b.2 * (1.0 - (b.1 - band.center()).abs());
            quality_b
                .partial_cmp(&quality_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.id.cmp(&b.0.id))
        });

        let recommendations: Vec<DiscoveryRecommendation> = scored
            .into_iter()
            .take(limit)
            .map(|(item, div, _)| self.recommend(profile, item, div))
            .collect();

        info!(
            user_id = %profile.user_id,
            picks = recommendations.len(),
            "discovery selection complete"
        );

        DiscoveryOutcome {
            recommendations,
            exploratory: false,
        }
    }

    /// Accessibility gate: the same reading-level fit the scorer uses.
    fn accessibility(&self, profile: &UserProfile, item: &ContentItem) -> f64 {
        let ability = profile.reading_ability(&item.language);
        reading_fit::fit(ability.level, item.reading_level_score, &self.scoring)
    }

    fn cold_start(
        &self,
        profile: &UserProfile,
        pool: &[ContentItem],
        limit: usize,
    ) -> DiscoveryOutcome {
        let mut accessible: Vec<(&ContentItem, f64)> = pool
            .iter()
            .filter_map(|item| {
                let fit = self.accessibility(profile, item);
                (fit >= self.config.accessibility_threshold).then_some((item, fit))
            })
            .collect();

        accessible.sort_by(|a, b| {
            b.0.popularity
                .partial_cmp(&a.0.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.id.cmp(&b.0.id))
        });

        let recommendations = accessible
            .into_iter()
            .take(limit)
            .map(|(item, _)| {
                let div = divergence::divergence_score(profile, item, &self.config);
                self.recommend(profile, item, div)
            })
            .collect();

        DiscoveryOutcome {
            recommendations,
            exploratory: true,
        }
    }

    fn recommend(
        &self,
        profile: &UserProfile,
        item: &ContentItem,
        divergence_score: f64,
    ) -> DiscoveryRecommendation {
        let bridging_topics = bridging::bridging_topics(profile, item, &self.config);
        let reason = bridging::reason(item, &bridging_topics);
        DiscoveryRecommendation {
            content_id: item.id.clone(),
            divergence_score,
            bridging_topics,
            reason,
            user_response: Default::default(),
        }
    }
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default(), ScoringConfig::default())
    }
}
