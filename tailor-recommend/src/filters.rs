//! Hard candidate filters applied before ranking.

use tailor_core::config::{RecommendConfig, ScoringConfig};
use tailor_core::content::ContentItem;
use tailor_core::profile::reading::ReadingLevel;

/// Whether an item fits the available reading time, with the configured
/// fractional slack.
pub fn fits_time_budget(item: &ContentItem, available_min: u32, config: &RecommendConfig) -> bool {
    let limit = available_min as f64 * (1.0 + config.time_tolerance);
    (item.estimated_reading_time_min as f64) <= limit
}

/// Whether an item is close enough to the user's reading band to rank
/// at all. Items above the band by more than `mismatch_bands` are still
/// ranked (flagged as mismatches); beyond `mismatch_bands + 1` they are
/// dropped unless the relaxation ladder widens the band.
pub fn within_level_band(
    item: &ContentItem,
    user_level: ReadingLevel,
    scoring: &ScoringConfig,
    extra_bands: f64,
) -> bool {
    user_level.bands_above(item.reading_level_score)
        <= scoring.mismatch_bands + 1.0 + extra_bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::make_item_full;

    #[test]
    fn tolerance_grants_slack() {
        let config = RecommendConfig::default();
        let item = make_item_full("c1", &[("scifi", 0.5)], 35, 2.0, 0.5);
        // 30 min budget, 20% tolerance → 36 min allowed.
        assert!(fits_time_budget(&item, 30, &config));
        let long = make_item_full("c2", &[("scifi", 0.5)], 37, 2.0, 0.5);
        assert!(!fits_time_budget(&long, 30, &config));
    }

    #[test]
    fn far_above_band_is_dropped_until_relaxed() {
        let scoring = ScoringConfig::default();
        let hard = make_item_full("c1", &[("scifi", 0.5)], 10, 4.5, 0.5);
        assert!(!within_level_band(&hard, ReadingLevel::Elementary, &scoring, 0.0));
        assert!(within_level_band(&hard, ReadingLevel::Elementary, &scoring, 2.0));
    }
}
