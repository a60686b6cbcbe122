//! Asymmetric reading-level fit.
//!
//! Content above the user's level is penalized more steeply than
//! content below it: below-level reading is comfortable, not wasted.

use tailor_core::config::ScoringConfig;
use tailor_core::profile::reading::ReadingLevel;

/// Fit in [0.0, 1.0]: 1.0 at the user's exact level, falling linearly
/// with band distance at the configured asymmetric rates.
pub fn fit(user_level: ReadingLevel, content_level_score: f64, config: &ScoringConfig) -> f64 {
    let bands_above = user_level.bands_above(content_level_score);
    let penalty = if bands_above >= 0.0 {
        config.above_level_penalty * bands_above
    } else {
        config.below_level_penalty * (-bands_above)
    };
    (1.0 - penalty).clamp(0.0, 1.0)
}

/// Whether content sits far enough above the user's band to be flagged
/// rather than silently ranked.
pub fn is_level_mismatch(
    user_level: ReadingLevel,
    content_level_score: f64,
    config: &ScoringConfig,
) -> bool {
    user_level.bands_above(content_level_score) > config.mismatch_bands
}
