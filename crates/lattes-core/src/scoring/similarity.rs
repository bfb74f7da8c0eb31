//! Cascading knowledge-area similarity
//!
//! Two declarations earn points level by level, top down, and stop at the
//! first level that differs. Absent equals absent at every level.

use tracing::debug;

use crate::types::{KnowledgeArea, ResearchProfile, ScoreResult};

/// Points for grande área, área, sub-área and especialidade matches
pub const LEVEL_WEIGHTS: [u32; 4] = [1, 2, 3, 5];

/// Score of a full four-level match
pub const FULL_MATCH: u32 = 11;

/// Similarity of two declarations, 0..=11
pub fn compare_areas(a: &KnowledgeArea, b: &KnowledgeArea) -> u32 {
    a.levels()
        .iter()
        .zip(b.levels().iter())
        .zip(LEVEL_WEIGHTS)
        .take_while(|((left, right), _)| left == right)
        .map(|(_, weight)| weight)
        .sum()
}

/// Sum of [`compare_areas`] over every (reference, candidate) pair
pub fn profile_score(reference: &[KnowledgeArea], candidate: &[KnowledgeArea]) -> u32 {
    reference
        .iter()
        .flat_map(|r| candidate.iter().map(move |c| compare_areas(r, c)))
        .sum()
}

/// Drop zero totals and sort by descending score; ties keep input order
pub fn rank(results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    let mut ranked: Vec<ScoreResult> = results.into_iter().filter(|r| r.score > 0).collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Score every candidate against the reference and rank them
pub fn rank_candidates<'a>(
    reference: &ResearchProfile,
    candidates: impl IntoIterator<Item = &'a ResearchProfile>,
) -> Vec<ScoreResult> {
    let scored: Vec<ScoreResult> = candidates
        .into_iter()
        .map(|candidate| {
            let score = profile_score(reference.areas(), candidate.areas());
            debug!(file = %candidate.label(), score, "scored candidate");
            ScoreResult::new(candidate.label(), score)
        })
        .collect();
    rank(scored)
}
