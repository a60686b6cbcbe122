use serde::{Deserialize, Serialize};

/// A single factor's contribution to an interest score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    /// Factor name ("topic_match", "type_affinity", "reading_level_fit",
    /// "context_boost", "popularity").
    pub name: String,
    /// Weighted contribution to the final score.
    pub contribution: f64,
    /// Human-readable detail ("strong match on scifi", ...).
    pub detail: String,
}

/// Per-factor breakdown attached to every recommendation for
/// explanation and transparency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    /// All contributing factors, largest contribution first.
    pub factors: Vec<ScoreFactor>,
}

impl ScoreExplanation {
    /// Names of the strongest factors, in order.
    pub fn dominant_factors(&self, n: usize) -> Vec<&str> {
        self.factors
            .iter()
            .take(n)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Sort factors by contribution, descending, deterministic.
    pub fn sorted(mut self) -> Self {
        self.factors.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        self
    }
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub content_id: String,
    /// Final score in [0.0, 1.0] after contextual boosts and diversity.
    pub score: f64,
    pub explanation: ScoreExplanation,
    /// Set when the item's reading level exceeds the user's band by more
    /// than one level. Surfaced instead of silently dropping the item.
    #[serde(default)]
    pub level_mismatch: bool,
}

/// A constraint dropped by the relaxation ladder, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationStep {
    /// Contextual boosts disabled.
    ContextBoosts,
    /// Time-budget filter dropped.
    TimeBudget,
    /// Reading-level accessibility band widened.
    ReadingLevelBand,
}

/// Envelope for a ranked result list with degradation flags.
/// Flags are reported, never silent: callers can always tell which
/// guarantees the list still carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub results: Vec<RecommendationResult>,
    /// No usable context was supplied or inferred.
    #[serde(default)]
    pub uncontextualized: bool,
    /// Cold-start profile: results favor popular/diverse content.
    #[serde(default)]
    pub exploratory: bool,
    /// Candidate retrieval timed out and a cached set was used.
    #[serde(default)]
    pub incomplete: bool,
    /// Constraints relaxed to produce a non-empty result, in order.
    #[serde(default)]
    pub relaxed: Vec<RelaxationStep>,
}
