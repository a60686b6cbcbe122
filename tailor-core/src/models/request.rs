use serde::{Deserialize, Serialize};

use super::context::RequestContext;
use crate::profile::reading::Language;

/// A request for ranked recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: String,
    /// Explicit context; `None` or empty triggers inference from history.
    #[serde(default)]
    pub context: Option<RequestContext>,
    /// Maximum number of results to return.
    pub limit: usize,
    pub language: Language,
    /// Session handle for last-request-wins supersession. Requests
    /// without a session are never superseded.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl RecommendationRequest {
    pub fn new(user_id: impl Into<String>, limit: usize, language: Language) -> Self {
        Self {
            user_id: user_id.into(),
            context: None,
            limit,
            language,
            session_id: None,
        }
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}
