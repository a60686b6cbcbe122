use serde::{Deserialize, Serialize};

use super::defaults;

/// Content access configuration: store deadlines and cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Deadline for a content store query before the cached fallback
    /// is served.
    pub store_deadline_ms: u64,
    /// Max entries in the embedding cache.
    pub embedding_cache_capacity: u64,
    /// TTL for embedding cache entries (seconds).
    pub embedding_cache_ttl_secs: u64,
    /// Max entries in the candidate-set fallback cache.
    pub candidate_cache_capacity: u64,
    /// TTL for candidate-set cache entries (seconds).
    pub candidate_cache_ttl_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            store_deadline_ms: defaults::DEFAULT_STORE_DEADLINE_MS,
            embedding_cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
            embedding_cache_ttl_secs: defaults::DEFAULT_EMBEDDING_CACHE_TTL_SECS,
            candidate_cache_capacity: defaults::DEFAULT_CANDIDATE_CACHE_CAPACITY,
            candidate_cache_ttl_secs: defaults::DEFAULT_CANDIDATE_CACHE_TTL_SECS,
        }
    }
}
