//! CachedContentStore — deadline-bounded candidate retrieval with a
//! cached fallback.
//!
//! Every query races a configured deadline. Successful results refresh
//! the fallback cache; a timeout or store error serves the last cached
//! set for the query fingerprint and reports the result as potentially
//! incomplete. No recommendation path blocks on the content store
//! indefinitely.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tracing::warn;

use tailor_core::config::ContentConfig;
use tailor_core::content::ContentItem;
use tailor_core::errors::TailorResult;
use tailor_core::traits::{ContentQuery, IContentStore};

/// A candidate set plus whether it came from the degraded path.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    pub items: Vec<ContentItem>,
    /// True when the store missed its deadline (or failed) and a cached
    /// or empty set was served instead.
    pub incomplete: bool,
}

/// Deadline wrapper around an `IContentStore`.
pub struct CachedContentStore {
    inner: Arc<dyn IContentStore>,
    cache: Cache<String, Arc<Vec<ContentItem>>>,
    deadline: Duration,
}

impl CachedContentStore {
    pub fn new(inner: Arc<dyn IContentStore>, config: &ContentConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.candidate_cache_capacity)
            .time_to_live(Duration::from_secs(config.candidate_cache_ttl_secs))
            .build();
        Self {
            inner,
            cache,
            deadline: Duration::from_millis(config.store_deadline_ms),
        }
    }

    /// Query with the deadline, falling back to the cached candidate
    /// set on timeout or error.
    pub async fn query(&self, query: &ContentQuery) -> TailorResult<CandidateSet> {
        let fingerprint = query.fingerprint();

        match tokio::time::timeout(self.deadline, self.inner.query(query)).await {
            Ok(Ok(items)) => {
                self.cache.insert(fingerprint, Arc::new(items.clone()));
                Ok(CandidateSet {
                    items,
                    incomplete: false,
                })
            }
            Ok(Err(error)) => {
                warn!(%error, "content store query failed, serving cached set");
                Ok(self.fallback(&fingerprint))
            }
            Err(_elapsed) => {
                warn!(deadline_ms = self.deadline.as_millis() as u64, "content store deadline missed, serving cached set");
                Ok(self.fallback(&fingerprint))
            }
        }
    }

    /// Fetch a single item, bounded by the same deadline. Misses and
    /// timeouts both surface as `None` — item lookups are enrichment,
    /// not a hard dependency.
    pub async fn get(&self, content_id: &str) -> Option<ContentItem> {
        match tokio::time::timeout(self.deadline, self.inner.get(content_id)).await {
            Ok(Ok(item)) => item,
            Ok(Err(error)) => {
                warn!(%error, content_id, "content lookup failed");
                None
            }
            Err(_elapsed) => {
                warn!(content_id, "content lookup deadline missed");
                None
            }
        }
    }

    fn fallback(&self, fingerprint: &str) -> CandidateSet {
        let items = self
            .cache
            .get(fingerprint)
            .map(|cached| cached.as_ref().clone())
            .unwrap_or_default();
        CandidateSet {
            items,
            incomplete: true,
        }
    }
}
