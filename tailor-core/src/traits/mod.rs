pub mod analyzer;
pub mod content_store;
pub mod profile_store;

pub use analyzer::IContentAnalyzer;
pub use content_store::{ContentQuery, IContentStore};
pub use profile_store::IProfileStore;
