//! Batch scoring: the pure scorer mapped across a candidate pool in
//! parallel. Output order matches input order, keeping results
//! deterministic regardless of scheduling.

use rayon::prelude::*;

use tailor_core::config::ScoringConfig;
use tailor_core::content::ContentItem;
use tailor_core::profile::UserProfile;

use crate::interest::{self, ScoreBreakdown};

/// Score every item in the pool against one profile.
pub fn score_pool<'a>(
    profile: &UserProfile,
    pool: &'a [ContentItem],
    config: &ScoringConfig,
) -> Vec<(&'a ContentItem, ScoreBreakdown)> {
    pool.par_iter()
        .map(|item| (item, interest::score_breakdown(profile, item, config)))
        .collect()
}
