//! Soft contextual boosts: multiplicative factors derived from learned
//! context affinities, hard-bounded so context can nudge but never
//! dominate the interest score.

use tailor_core::config::RecommendConfig;
use tailor_core::models::context::RequestContext;
use tailor_core::profile::UserProfile;

/// Combined boost factor for a request context, clamped to
/// [boost_floor, boost_ceiling].
///
/// Each active factor contributes `1 + weight × scale`; the product is
/// clamped once at the end so stacked affinities still respect the
/// bounds.
pub fn boost_factor(
    profile: &UserProfile,
    context: &RequestContext,
    config: &RecommendConfig,
) -> f64 {
    let mut factor = 1.0;
    for cf in context.factors() {
        let weight = profile.contextual_weight(cf).value();
        factor *= 1.0 + weight * config.boost_scale;
    }
    factor.clamp(config.boost_floor, config.boost_ceiling)
}
