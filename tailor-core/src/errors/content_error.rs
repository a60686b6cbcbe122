/// Content analyzer and content store errors.
///
/// These are never fatal for a recommendation request: the engine
/// degrades to cached or fallback data and flags the response.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content store query timed out after {deadline_ms}ms")]
    StoreTimeout { deadline_ms: u64 },

    #[error("content store query failed: {reason}")]
    StoreFailed { reason: String },

    #[error("analyzer unavailable for language {language}: {reason}")]
    AnalyzerUnavailable { language: String, reason: String },

    #[error("content {content_id} not found")]
    NotFound { content_id: String },
}
