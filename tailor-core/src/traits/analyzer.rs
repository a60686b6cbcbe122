use crate::content::analysis::ContentAnalysis;
use crate::errors::TailorResult;
use crate::profile::reading::Language;

/// Language-specific content analysis: topic scores, reading level,
/// embedding, key phrases.
///
/// Implementations are registered per language in an analyzer registry;
/// dispatch happens on `content.language`. Text for an unregistered
/// language goes to the keyword fallback analyzer and is marked
/// low-confidence.
pub trait IContentAnalyzer: Send + Sync {
    /// The language this analyzer handles.
    fn language(&self) -> Language;

    /// Analyze raw text.
    fn analyze(&self, text: &str) -> TailorResult<ContentAnalysis>;
}
