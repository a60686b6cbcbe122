//! ContextualRecommender — orchestrates the full ranking pipeline over
//! a scored candidate pool.

use tracing::{debug, info};

use tailor_core::config::{RecommendConfig, ScoringConfig};
use tailor_core::content::ContentItem;
use tailor_core::feedback::event::FeedbackEvent;
use tailor_core::models::context::RequestContext;
use tailor_core::models::request::RecommendationRequest;
use tailor_core::models::result::{
    RecommendationResult, RelaxationStep, ScoreFactor,
};
use tailor_core::profile::{Confidence, UserProfile};
use tailor_scoring::score_pool;

use crate::context::{boost_factor, infer_context};
use crate::diversity::{self, DiversityCandidate};
use crate::filters;

/// Ranked results plus the degradation flags the caller folds into the
/// response envelope.
#[derive(Debug, Clone, Default)]
pub struct RankingOutcome {
    pub results: Vec<RecommendationResult>,
    pub uncontextualized: bool,
    pub exploratory: bool,
    pub relaxed: Vec<RelaxationStep>,
}

/// The contextual ranking engine. Pure over its inputs: candidate
/// retrieval and profile reads happen in the caller.
pub struct ContextualRecommender {
    scoring: ScoringConfig,
    config: RecommendConfig,
}

impl ContextualRecommender {
    pub fn new(scoring: ScoringConfig, config: RecommendConfig) -> Self {
        Self { scoring, config }
    }

    /// Rank `pool` for a request. `history` is the user's recent event
    /// stream, consulted only when the request carries no context.
    pub fn rank(
        &self,
        profile: &UserProfile,
        request: &RecommendationRequest,
        pool: &[ContentItem],
        history: &[FeedbackEvent],
    ) -> RankingOutcome {
        let (context, uncontextualized) = self.resolve_context(request, history);
        // Low aggregate confidence marks the result exploratory: the
        // scorer is already blending toward popularity for such profiles.
        let exploratory = profile.aggregate_confidence() < Confidence::LOW;

        let scored = score_pool(profile, pool, &self.scoring);

        // Relaxation ladder: each attempt drops one more constraint, in
        // a fixed order, until something ranks. Relaxed constraints are
        // reported, never silent.
        let ladder: [(bool, bool, f64, Vec<RelaxationStep>); 4] = [
            (true, true, 0.0, vec![]),
            (false, true, 0.0, vec![RelaxationStep::ContextBoosts]),
            (
                false,
                false,
                0.0,
                vec![RelaxationStep::ContextBoosts, RelaxationStep::TimeBudget],
            ),
            (
                false,
                false,
                self.config.relaxed_level_extra_bands,
                vec![
                    RelaxationStep::ContextBoosts,
                    RelaxationStep::TimeBudget,
                    RelaxationStep::ReadingLevelBand,
                ],
            ),
        ];

        for (use_boosts, use_time_filter, extra_bands, relaxed) in ladder {
            let results = self.attempt(
                profile,
                request,
                &context,
                pool,
                &scored,
                use_boosts,
                use_time_filter,
                extra_bands,
            );
            if !results.is_empty() {
                if !relaxed.is_empty() {
                    info!(user_id = %request.user_id, ?relaxed, "constraints relaxed");
                }
                return RankingOutcome {
                    results,
                    uncontextualized,
                    exploratory,
                    relaxed,
                };
            }
        }

        debug!(user_id = %request.user_id, "no candidates even after full relaxation");
        RankingOutcome {
            results: Vec::new(),
            uncontextualized,
            exploratory,
            relaxed: vec![
                RelaxationStep::ContextBoosts,
                RelaxationStep::TimeBudget,
                RelaxationStep::ReadingLevelBand,
            ],
        }
    }

    /// One ladder rung: filter, boost, diversify, annotate.
    #[allow(clippy::too_many_arguments)]
    fn attempt(
        &self,
        profile: &UserProfile,
        request: &RecommendationRequest,
        context: &RequestContext,
        pool: &[ContentItem],
        scored: &[(&ContentItem, tailor_scoring::ScoreBreakdown)],
        use_boosts: bool,
        use_time_filter: bool,
        extra_bands: f64,
    ) -> Vec<RecommendationResult> {
        let user_level = profile.reading_ability(&request.language).level;
        let boost = if use_boosts {
            boost_factor(profile, context, &self.config)
        } else {
            1.0
        };

        let candidates: Vec<DiversityCandidate> = scored
            .iter()
            .enumerate()
            .filter(|(_, (item, _))| {
                if item.language != request.language {
                    return false;
                }
                if !filters::within_level_band(item, user_level, &self.scoring, extra_bands) {
                    return false;
                }
                match (use_time_filter, context.available_time_min) {
                    (true, Some(available)) => {
                        filters::fits_time_budget(item, available, &self.config)
                    }
                    _ => true,
                }
            })
            .map(|(index, (_, breakdown))| DiversityCandidate {
                index,
                score: (breakdown.final_score * boost).clamp(0.0, 1.0),
            })
            .collect();

        let picked = diversity::rerank(
            pool,
            candidates,
            request.limit,
            self.config.diversity_decay,
        );

        picked
            .into_iter()
            .map(|candidate| {
                let (item, breakdown) = &scored[candidate.index];
                let mut explanation = breakdown.explanation(item, &self.scoring);
                if use_boosts && (boost - 1.0).abs() > f64::EPSILON {
                    explanation.factors.push(ScoreFactor {
                        name: "context_boost".to_string(),
                        contribution: breakdown.final_score * (boost - 1.0),
                        detail: format!("contextual fit adjusted score by ×{boost:.2}"),
                    });
                    explanation = explanation.sorted();
                }
                RecommendationResult {
                    content_id: item.id.clone(),
                    score: candidate.score,
                    explanation,
                    level_mismatch: breakdown.level_mismatch,
                }
            })
            .collect()
    }

    /// Explicit context wins; otherwise infer from history; otherwise
    /// neutral and uncontextualized.
    fn resolve_context(
        &self,
        request: &RecommendationRequest,
        history: &[FeedbackEvent],
    ) -> (RequestContext, bool) {
        if let Some(context) = &request.context {
            if !context.is_empty() {
                return (context.clone(), false);
            }
        }
        match infer_context(history, &self.config) {
            Some(mut inferred) => {
                // A request-supplied time budget survives inference.
                if let Some(context) = &request.context {
                    inferred.available_time_min = context.available_time_min;
                }
                (inferred, false)
            }
            None => (
                request.context.clone().unwrap_or_default(),
                true,
            ),
        }
    }
}

impl Default for ContextualRecommender {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), RecommendConfig::default())
    }
}
