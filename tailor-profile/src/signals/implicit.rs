//! Implicit behavior → normalized engagement value.

/// Relative contribution of completion rate to the combined value.
const COMPLETION_SHARE: f64 = 0.6;
/// Relative contribution of the speed term.
const SPEED_SHARE: f64 = 0.2;
/// Engagement bonus for coming back to an item.
const RETURN_BONUS: f64 = 0.3;
/// Penalty per pause event.
const PAUSE_PENALTY: f64 = 0.05;
/// Pauses beyond this stop adding penalty.
const MAX_PENALIZED_PAUSES: u32 = 5;

/// Combine implicit observations into a single value in [-1.0, 1.0].
///
/// Completion maps linearly onto [-1, 1]. The speed term rewards
/// reading near the user's own baseline: large deviations in either
/// direction (skimming, struggling) count against engagement.
pub fn normalize(
    completion_rate: f64,
    reading_speed_ratio: Option<f64>,
    pause_count: u32,
    return_visit: bool,
) -> f64 {
    let completion = 2.0 * completion_rate.clamp(0.0, 1.0) - 1.0;

    let speed = match reading_speed_ratio {
        Some(ratio) if ratio > 0.0 => 1.0 - 2.0 * (ratio - 1.0).abs().min(1.0),
        _ => 0.0,
    };

    let pauses = PAUSE_PENALTY * pause_count.min(MAX_PENALIZED_PAUSES) as f64;
    let revisit = if return_visit { RETURN_BONUS } else { 0.0 };

    (COMPLETION_SHARE * completion + SPEED_SHARE * speed + revisit - pauses).clamp(-1.0, 1.0)
}
