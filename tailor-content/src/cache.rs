//! Bounded in-memory embedding cache using moka.
//!
//! TinyLFU admission, capacity-bounded, per-entry TTL. Keys are blake3
//! hashes of the analyzed text, so identical content never re-embeds.

use std::time::Duration;

use moka::sync::Cache;

/// In-memory embedding cache.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache with the given max entry count and TTL.
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();
        Self { cache }
    }

    /// blake3 key for a piece of content text.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    /// Get an embedding by content key.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    /// Insert an embedding keyed by content key.
    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = EmbeddingCache::new(100, 3600);
        let key = EmbeddingCache::key("some article text");
        cache.insert(key.clone(), vec![0.1, 0.2]);
        assert_eq!(cache.get(&key), Some(vec![0.1, 0.2]));
    }

    #[test]
    fn identical_text_same_key() {
        assert_eq!(EmbeddingCache::key("abc"), EmbeddingCache::key("abc"));
        assert_ne!(EmbeddingCache::key("abc"), EmbeddingCache::key("abd"));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(100, 3600);
        assert_eq!(cache.get("nope"), None);
    }
}
