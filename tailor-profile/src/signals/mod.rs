//! Signal normalization: every feedback signal maps onto [-1.0, 1.0]
//! before the fold sees it.

pub mod implicit;
pub mod recency;

use tailor_core::config::FeedbackConfig;
use tailor_core::feedback::event::{DiscoveryResponse, FeedbackSignal};

/// Normalize a signal onto [-1.0, 1.0].
///
/// Implicit signals are normalized against the user's own rolling
/// reading-speed baseline, not population statistics.
pub fn normalize(signal: &FeedbackSignal) -> f64 {
    match signal {
        FeedbackSignal::Explicit { rating, .. } => rating.clamp(-1.0, 1.0),
        FeedbackSignal::Categorical { liked } => {
            if *liked {
                1.0
            } else {
                -1.0
            }
        }
        FeedbackSignal::Implicit {
            completion_rate,
            reading_speed_ratio,
            pause_count,
            return_visit,
        } => implicit::normalize(
            *completion_rate,
            *reading_speed_ratio,
            *pause_count,
            *return_visit,
        ),
        FeedbackSignal::Discovery { response } => match response {
            DiscoveryResponse::Interested => 1.0,
            DiscoveryResponse::Saved => 0.6,
            DiscoveryResponse::NotInterested => -1.0,
            DiscoveryResponse::None => 0.0,
        },
    }
}

/// Base signal weight for a signal kind. Explicit signals carry more
/// weight than implicit observations.
pub fn signal_weight(signal: &FeedbackSignal, config: &FeedbackConfig) -> f64 {
    match signal {
        FeedbackSignal::Explicit { .. } | FeedbackSignal::Categorical { .. } => {
            config.explicit_signal_weight
        }
        FeedbackSignal::Implicit { .. } => config.implicit_signal_weight,
        FeedbackSignal::Discovery { .. } => config.discovery_signal_weight,
    }
}
