//! AnalyzerRegistry — language-keyed analyzer dispatch.
//!
//! One registry holds every language-specific analyzer implementation;
//! lookup happens on the content's language tag. Unregistered languages
//! fall through to the keyword analyzer rather than failing: the result
//! is usable but marked low-confidence.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use tailor_core::content::analysis::ContentAnalysis;
use tailor_core::errors::TailorResult;
use tailor_core::profile::reading::Language;
use tailor_core::traits::IContentAnalyzer;

use crate::keyword::{KeywordAnalyzer, TopicLexicon};

/// Language-dispatched analyzer lookup with a keyword fallback.
pub struct AnalyzerRegistry {
    analyzers: HashMap<Language, Arc<dyn IContentAnalyzer>>,
    fallback: KeywordAnalyzer,
}

impl AnalyzerRegistry {
    /// Build a registry with the given fallback lexicon.
    pub fn new(fallback_lexicon: TopicLexicon) -> Self {
        Self {
            analyzers: HashMap::new(),
            fallback: KeywordAnalyzer::new(Language::Other("und".to_string()), fallback_lexicon),
        }
    }

    /// Register an analyzer under the language it reports.
    pub fn register(&mut self, analyzer: Arc<dyn IContentAnalyzer>) {
        self.analyzers.insert(analyzer.language(), analyzer);
    }

    /// Whether a dedicated analyzer exists for a language.
    pub fn supports(&self, language: &Language) -> bool {
        self.analyzers.contains_key(language)
    }

    /// Analyze `text` as `language`.
    ///
    /// Dispatch order: registered analyzer → keyword fallback when the
    /// language is unregistered or the analyzer errors. Fallback output
    /// is marked low-confidence.
    pub fn analyze(&self, text: &str, language: &Language) -> TailorResult<ContentAnalysis> {
        match self.analyzers.get(language) {
            Some(analyzer) => match analyzer.analyze(text) {
                Ok(analysis) => Ok(analysis),
                Err(error) => {
                    warn!(%language, %error, "analyzer failed, using keyword fallback");
                    self.fallback.analyze(text)
                }
            },
            None => {
                warn!(%language, "no analyzer registered, using keyword fallback");
                self.fallback.analyze(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_core::errors::ContentError;

    struct StubAnalyzer {
        language: Language,
        fail: bool,
    }

    impl IContentAnalyzer for StubAnalyzer {
        fn language(&self) -> Language {
            self.language.clone()
        }

        fn analyze(&self, _text: &str) -> TailorResult<ContentAnalysis> {
            if self.fail {
                return Err(ContentError::AnalyzerUnavailable {
                    language: self.language.code().to_string(),
                    reason: "stub outage".to_string(),
                }
                .into());
            }
            Ok(ContentAnalysis {
                topic_scores: [("scifi".to_string(), 0.9)].into_iter().collect(),
                reading_level_score: 2.0,
                embedding: vec![0.5; 8],
                key_phrases: vec![],
                low_confidence: false,
            })
        }
    }

    #[test]
    fn registered_language_uses_its_analyzer() {
        let mut registry = AnalyzerRegistry::new(TopicLexicon::new());
        registry.register(Arc::new(StubAnalyzer {
            language: Language::English,
            fail: false,
        }));

        let analysis = registry.analyze("whatever", &Language::English).unwrap();
        assert!(!analysis.low_confidence);
        assert_eq!(analysis.topic_scores["scifi"], 0.9);
    }

    #[test]
    fn unknown_language_falls_back_low_confidence() {
        let registry = AnalyzerRegistry::new(TopicLexicon::new());
        let analysis = registry.analyze("text", &Language::Japanese).unwrap();
        assert!(analysis.low_confidence);
    }

    #[test]
    fn failing_analyzer_degrades_to_fallback() {
        let mut registry = AnalyzerRegistry::new(TopicLexicon::new());
        registry.register(Arc::new(StubAnalyzer {
            language: Language::English,
            fail: true,
        }));

        let analysis = registry.analyze("text", &Language::English).unwrap();
        assert!(analysis.low_confidence);
    }
}
