//! # tailor-content
//!
//! Everything between the engine and external content services:
//! language-dispatched analyzer lookup, the keyword-frequency fallback
//! analyzer, the bounded embedding cache, and a deadline-wrapped
//! content store that degrades to cached candidate sets.

pub mod cache;
pub mod keyword;
pub mod registry;
pub mod store;

pub use cache::EmbeddingCache;
pub use keyword::KeywordAnalyzer;
pub use registry::AnalyzerRegistry;
pub use store::CachedContentStore;
