pub mod content_error;
pub mod profile_error;
pub mod recommend_error;

pub use content_error::ContentError;
pub use profile_error::ProfileError;
pub use recommend_error::RecommendError;

/// Convenience alias used across the workspace.
pub type TailorResult<T> = Result<T, TailorError>;

/// Top-level error type aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum TailorError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid context factor: {0}")]
    InvalidContextFactor(String),
}
