//! Diversity re-ranking: greedy selection with a topic-decay penalty.
//!
//! Iteratively pick the highest-scoring remaining candidate, then decay
//! every other candidate sharing its dominant topics. Breaks up
//! homogeneous top-K lists while preserving overall ranking quality.

use std::collections::HashSet;

use tailor_core::constants::DIVERSITY_TOPIC_FANOUT;
use tailor_core::content::ContentItem;

/// A candidate entering the diversity pass: index into the caller's
/// pool plus its working score.
#[derive(Debug, Clone)]
pub struct DiversityCandidate {
    pub index: usize,
    pub score: f64,
}

/// Re-rank candidates, returning at most `limit` picks in selection
/// order. `items[c.index]` must be the content for candidate `c`.
pub fn rerank(
    items: &[ContentItem],
    mut candidates: Vec<DiversityCandidate>,
    limit: usize,
    decay: f64,
) -> Vec<DiversityCandidate> {
    let mut picked = Vec::with_capacity(limit.min(candidates.len()));

    while picked.len() < limit && !candidates.is_empty() {
        // Highest working score; ties break on content id for determinism.
        let Some(best_pos) = candidates
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| items[b.index].id.cmp(&items[a.index].id))
            })
            .map(|(pos, _)| pos)
        else {
            break;
        };

        let best = candidates.swap_remove(best_pos);
        let penalized: HashSet<&str> = items[best.index]
            .dominant_topics(DIVERSITY_TOPIC_FANOUT)
            .into_iter()
            .collect();

        for candidate in &mut candidates {
            let shares_topic = items[candidate.index]
                .dominant_topics(DIVERSITY_TOPIC_FANOUT)
                .iter()
                .any(|t| penalized.contains(t));
            if shares_topic {
                candidate.score *= decay;
            }
        }

        picked.push(best);
    }

    picked
}
