use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;

/// Content language. Reading ability is tracked independently per language;
/// updating one language never touches another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    English,
    Japanese,
    /// Any other ISO 639-1 style code. Analysis for these falls back to
    /// the keyword analyzer.
    Other(String),
}

impl Language {
    /// Lowercase language code ("en", "ja", ...).
    pub fn code(&self) -> &str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::Other(code) => code.as_str(),
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Self::English,
            "ja" | "japanese" => Self::Japanese,
            _ => Self::Other(code.to_ascii_lowercase()),
        }
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ordinal reading level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingLevel {
    Beginner,
    Elementary,
    Intermediate,
    UpperIntermediate,
    Advanced,
}

impl ReadingLevel {
    /// All bands in ascending order.
    pub const ALL: [ReadingLevel; 5] = [
        Self::Beginner,
        Self::Elementary,
        Self::Intermediate,
        Self::UpperIntermediate,
        Self::Advanced,
    ];

    /// Continuous projection onto [0.0, 4.0], one unit per band.
    pub fn as_score(self) -> f64 {
        match self {
            Self::Beginner => 0.0,
            Self::Elementary => 1.0,
            Self::Intermediate => 2.0,
            Self::UpperIntermediate => 3.0,
            Self::Advanced => 4.0,
        }
    }

    /// Nearest band for a continuous score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 0.5 => Self::Beginner,
            s if s < 1.5 => Self::Elementary,
            s if s < 2.5 => Self::Intermediate,
            s if s < 3.5 => Self::UpperIntermediate,
            _ => Self::Advanced,
        }
    }

    /// Band distance, positive when `content` sits above `self`.
    pub fn bands_above(self, content_score: f64) -> f64 {
        content_score - self.as_score()
    }
}

impl Default for ReadingLevel {
    fn default() -> Self {
        Self::Intermediate
    }
}

/// Per-language reading ability with its own confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingAbility {
    pub level: ReadingLevel,
    pub confidence: Confidence,
    /// Rolling baseline of the user's own reading speed (words per minute),
    /// used to normalize implicit speed signals. `None` until observed.
    #[serde(default)]
    pub speed_baseline_wpm: Option<f64>,
}

impl Default for ReadingAbility {
    fn default() -> Self {
        Self {
            level: ReadingLevel::default(),
            confidence: Confidence::default(),
            speed_baseline_wpm: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from("EN".to_string()), Language::English);
        assert_eq!(Language::from("ja".to_string()), Language::Japanese);
        assert_eq!(
            Language::from("de".to_string()),
            Language::Other("de".to_string())
        );
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn level_score_round_trip() {
        for level in ReadingLevel::ALL {
            assert_eq!(ReadingLevel::from_score(level.as_score()), level);
        }
    }
}
