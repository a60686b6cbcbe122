//! Keyword-frequency fallback analyzer.
//!
//! Serves two degradation paths: text in a language with no registered
//! analyzer, and a registered analyzer being unavailable. Topic scores
//! come from lexicon matches over word frequencies; the reading level
//! from coarse surface statistics. Results are always marked
//! low-confidence — they cannot replace a real analyzer.

use std::collections::HashMap;

use regex::Regex;

use tailor_core::content::analysis::ContentAnalysis;
use tailor_core::errors::TailorResult;
use tailor_core::profile::reading::Language;
use tailor_core::traits::IContentAnalyzer;

/// Topic → keyword list used for frequency scoring.
pub type TopicLexicon = HashMap<String, Vec<String>>;

/// Word-frequency analyzer with a configurable topic lexicon.
pub struct KeywordAnalyzer {
    language: Language,
    lexicon: TopicLexicon,
    word_re: Regex,
}

impl KeywordAnalyzer {
    pub fn new(language: Language, lexicon: TopicLexicon) -> Self {
        Self {
            language,
            lexicon,
            // Unicode word characters, so non-Latin scripts tokenize too.
            word_re: Regex::new(r"[\p{L}\p{N}]+").expect("valid literal regex"),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_re
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    /// Coarse reading-level score from surface statistics: longer words
    /// and a richer vocabulary push the estimate up the band scale.
    fn reading_level(&self, words: &[String]) -> f64 {
        if words.is_empty() {
            return 2.0;
        }
        let avg_len: f64 =
            words.iter().map(|w| w.chars().count() as f64).sum::<f64>() / words.len() as f64;
        let distinct: std::collections::HashSet<&str> =
            words.iter().map(|w| w.as_str()).collect();
        let type_token = distinct.len() as f64 / words.len() as f64;

        // avg_len ~3 → beginner territory, ~8+ → advanced; type-token
        // richness shifts by up to one band.
        let from_length = ((avg_len - 3.0) / 5.0).clamp(0.0, 1.0) * 4.0;
        (from_length * 0.75 + type_token * 4.0 * 0.25).clamp(0.0, 4.0)
    }
}

impl IContentAnalyzer for KeywordAnalyzer {
    fn language(&self) -> Language {
        self.language.clone()
    }

    fn analyze(&self, text: &str) -> TailorResult<ContentAnalysis> {
        let words = self.tokenize(text);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for w in &words {
            *counts.entry(w.as_str()).or_default() += 1;
        }

        let total = words.len().max(1) as f64;
        let topic_scores: HashMap<String, f64> = self
            .lexicon
            .iter()
            .filter_map(|(topic, keywords)| {
                let hits: usize = keywords
                    .iter()
                    .map(|k| counts.get(k.as_str()).copied().unwrap_or(0))
                    .sum();
                if hits == 0 {
                    return None;
                }
                // Saturating frequency → score mapping.
                let score = (hits as f64 / total * 20.0).min(1.0);
                Some((topic.clone(), score))
            })
            .collect();

        let mut by_freq: Vec<(&str, usize)> = counts
            .iter()
            .filter(|(w, _)| w.chars().count() > 4)
            .map(|(w, c)| (*w, *c))
            .collect();
        by_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let key_phrases: Vec<String> =
            by_freq.iter().take(5).map(|(w, _)| w.to_string()).collect();

        Ok(ContentAnalysis {
            topic_scores,
            reading_level_score: self.reading_level(&words),
            embedding: Vec::new(),
            key_phrases,
            low_confidence: true,
        })
    }
}
