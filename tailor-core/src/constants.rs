/// Tailor system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of preference snapshots retained per user.
pub const MAX_SNAPSHOTS_PER_USER: usize = 50;

/// Maximum candidate pool size accepted by a single ranking pass.
pub const MAX_CANDIDATE_POOL: usize = 5000;

/// Number of dominant topics an item contributes to the diversity penalty.
pub const DIVERSITY_TOPIC_FANOUT: usize = 2;
