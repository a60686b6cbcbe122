/// Recommendation and discovery pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("no candidates available for language {language}")]
    NoCandidates { language: String },

    #[error("request superseded by a newer request in session {session_id}")]
    Superseded { session_id: String },

    #[error("candidate pool exceeds limit: {size} > {max}")]
    PoolTooLarge { size: usize, max: usize },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },
}
