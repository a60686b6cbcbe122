use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::context::RequestContext;

/// User response to a discovery recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryResponse {
    Interested,
    NotInterested,
    Saved,
    None,
}

impl Default for DiscoveryResponse {
    fn default() -> Self {
        Self::None
    }
}

/// The signal carried by a feedback event.
///
/// Explicit signals carry a higher fold weight than implicit ones;
/// discovery responses fold into the discovery-openness contextual
/// preference rather than a topic weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackSignal {
    /// Direct rating in [-1.0, 1.0] with optional free-text context.
    Explicit {
        rating: f64,
        note: Option<String>,
    },
    /// Like/dislike button.
    Categorical { liked: bool },
    /// Behavioral observation.
    Implicit {
        /// Fraction of the item actually read, [0.0, 1.0].
        completion_rate: f64,
        /// Observed speed relative to the user's rolling baseline
        /// (1.0 = at baseline). `None` when no baseline exists yet.
        reading_speed_ratio: Option<f64>,
        /// Number of pause events during the session.
        pause_count: u32,
        /// Whether the user came back to this item.
        return_visit: bool,
    },
    /// Response to a discovery recommendation.
    Discovery { response: DiscoveryResponse },
}

impl FeedbackSignal {
    /// Whether this signal was deliberately expressed by the user.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit { .. } | Self::Categorical { .. })
    }
}

/// A single feedback event. `event_id` provides idempotence:
/// re-submission of an already-applied id is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub event_id: Uuid,
    pub user_id: String,
    pub content_id: String,
    pub timestamp: DateTime<Utc>,
    pub signal: FeedbackSignal,
    /// Context the interaction happened in; feeds contextual preference
    /// learning and context inference.
    pub context: Option<RequestContext>,
}

impl FeedbackEvent {
    pub fn new(
        user_id: impl Into<String>,
        content_id: impl Into<String>,
        signal: FeedbackSignal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            user_id: user_id.into(),
            content_id: content_id.into(),
            timestamp,
            signal,
            context: None,
        }
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }
}
