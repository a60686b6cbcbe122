use serde::{Deserialize, Serialize};

use super::defaults;

/// Preference evolution tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Folds between automatic snapshots.
    pub snapshot_every_events: u64,
    /// Hours between periodic snapshots.
    pub snapshot_interval_hours: u64,
    /// L2 distance between consecutive snapshots that flags a
    /// preference shift.
    pub shift_threshold: f64,
    /// Snapshots consulted when deriving per-topic trends.
    pub trend_window: usize,
    /// Slope magnitude below which a trend counts as stable.
    pub trend_slope_epsilon: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            snapshot_every_events: defaults::DEFAULT_SNAPSHOT_EVERY_EVENTS,
            snapshot_interval_hours: defaults::DEFAULT_SNAPSHOT_INTERVAL_HOURS,
            shift_threshold: defaults::DEFAULT_SHIFT_THRESHOLD,
            trend_window: defaults::DEFAULT_TREND_WINDOW,
            trend_slope_epsilon: defaults::DEFAULT_TREND_SLOPE_EPSILON,
        }
    }
}
