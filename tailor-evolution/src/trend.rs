//! Per-topic trend: the slope of a topic's weight across the last few
//! snapshots, bucketed into increasing/decreasing/stable.

use tailor_core::profile::preference::Trend;
use tailor_core::profile::snapshot::PreferenceSnapshot;

/// Least-squares slope of `topic`'s weight over the last `window`
/// snapshots (oldest first). Fewer than two observations is flat.
pub fn slope(snapshots: &[PreferenceSnapshot], topic: &str, window: usize) -> f64 {
    let recent: Vec<f64> = snapshots
        .iter()
        .rev()
        .take(window)
        .map(|s| s.weights.get(topic).copied().unwrap_or(0.0))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let n = recent.len();
    if n < 2 {
        return 0.0;
    }

    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y: f64 = recent.iter().sum::<f64>() / n_f;

    let mut num = 0.0;
    let mut den = 0.0;
    for (i, y) in recent.iter().enumerate() {
        let dx = i as f64 - mean_x;
        num += dx * (y - mean_y);
        den += dx * dx;
    }
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Bucket a slope into a trend with the configured stability band.
pub fn classify(slope: f64, epsilon: f64) -> Trend {
    if slope > epsilon {
        Trend::Increasing
    } else if slope < -epsilon {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
