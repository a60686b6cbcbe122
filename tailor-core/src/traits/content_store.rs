use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::item::ContentItem;
use crate::errors::TailorResult;
use crate::profile::reading::Language;

/// Filters for a candidate-content query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentQuery {
    pub language: Option<Language>,
    /// Upper bound on estimated reading time, minutes.
    pub max_reading_time_min: Option<u32>,
    /// Content ids to exclude (already seen, already recommended).
    pub exclude_ids: Vec<String>,
    /// Maximum candidates to return.
    pub limit: usize,
}

impl ContentQuery {
    /// Stable fingerprint of the query, used as the fallback-cache key.
    pub fn fingerprint(&self) -> String {
        // Exclusion lists vary per request and would defeat caching;
        // the fingerprint covers only the selective filters.
        let lang = self
            .language
            .as_ref()
            .map(|l| l.code().to_string())
            .unwrap_or_else(|| "*".to_string());
        let time = self
            .max_reading_time_min
            .map(|t| t.to_string())
            .unwrap_or_else(|| "*".to_string());
        blake3::hash(format!("{lang}|{time}|{}", self.limit).as_bytes())
            .to_hex()
            .to_string()
    }
}

/// Read-only access to candidate content. Calls may suspend on I/O;
/// callers bound them with a deadline and fall back to cached sets.
#[async_trait]
pub trait IContentStore: Send + Sync {
    /// Query candidates matching the filters.
    async fn query(&self, query: &ContentQuery) -> TailorResult<Vec<ContentItem>>;

    /// Fetch a single item by id.
    async fn get(&self, content_id: &str) -> TailorResult<Option<ContentItem>>;
}
