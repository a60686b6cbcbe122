/// Profile store and feedback fold errors.
///
/// Store failures are fatal for the request: the engine fails closed
/// rather than persisting a partial profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("profile not found for user {user_id}")]
    NotFound { user_id: String },

    #[error("event log append failed for user {user_id}: {reason}")]
    AppendFailed { user_id: String, reason: String },

    #[error("no override exists for user {user_id} topic {topic}")]
    NoSuchOverride { user_id: String, topic: String },

    #[error("invalid signal value: {reason}")]
    InvalidSignal { reason: String },
}
