//! Score fusion: collapse per-origin candidate lists into one ranking.
//!
//! Raw scores are min-max normalized within each origin's list (the scales
//! are incomparable across backends), then combined per unique source as
//! `fused = Σ weight[origin] × normalized`. A source returned by several
//! backends accumulates several terms — cross-backend agreement is the
//! primary fusion signal.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::HashMap;

use fathom_core::config::FusionWeights;
use fathom_core::models::{Candidate, FusedResult, Origin, OriginContribution};

/// Min-max normalize one origin's raw scores to [0, 1].
///
/// A single-element list normalizes to 1.0, as does a list where every score
/// is equal — the backend expressed no preference, and division by zero is
/// not an acceptable way to record that.
pub fn normalize(raw_scores: &[f64]) -> Vec<f64> {
    if raw_scores.is_empty() {
        return Vec::new();
    }
    let min = raw_scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= f64::EPSILON {
        return vec![1.0; raw_scores.len()];
    }
    raw_scores.iter().map(|s| (s - min) / range).collect()
}

/// Weighted sum of per-origin contributions — the one scoring function both
/// fusion and dedup use, so merged duplicates rescore identically.
pub fn score_contributions(
    contributions: &BTreeMap<Origin, OriginContribution>,
    weights: &FusionWeights,
) -> f64 {
    contributions
        .iter()
        .map(|(origin, c)| weights.for_origin(*origin) * c.normalized_score)
        .sum()
}

/// Deterministic ranking order for fused results.
///
/// Ties on fused score prefer more contributing origins, then the
/// higher-priority origin, then the lower original rank, then the source id
/// — never arbitrary iteration order.
pub fn sort_results(results: &mut [FusedResult]) {
    results.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.origin_count().cmp(&a.origin_count()))
            .then_with(|| a.best_origin_priority().cmp(&b.best_origin_priority()))
            .then_with(|| a.best_rank().cmp(&b.best_rank()))
            .then_with(|| a.representative.source_id.cmp(&b.representative.source_id))
    });
}

/// Fuse the per-origin candidate lists into one ranked list of unique
/// sources. Pure: same inputs and weights always yield the same output.
pub fn fuse(origin_lists: &[(Origin, Vec<Candidate>)], weights: &FusionWeights) -> Vec<FusedResult> {
    let mut by_source: HashMap<String, FusedResult> = HashMap::new();

    for (origin, candidates) in origin_lists {
        let raw: Vec<f64> = candidates.iter().map(|c| c.raw_score).collect();
        let normalized = normalize(&raw);

        for (rank, (candidate, norm)) in candidates.iter().zip(normalized).enumerate() {
            let contribution = OriginContribution {
                normalized_score: norm,
                rank,
            };
            match by_source.get_mut(&candidate.source_id) {
                None => {
                    let mut contributions = BTreeMap::new();
                    contributions.insert(*origin, contribution);
                    by_source.insert(
                        candidate.source_id.clone(),
                        FusedResult {
                            representative: candidate.clone(),
                            contributions,
                            fused_score: 0.0,
                            merged_snippets: Vec::new(),
                        },
                    );
                }
                Some(existing) => {
                    // A duplicate within one origin's list keeps its best
                    // showing; a new origin adds a fresh term.
                    existing
                        .contributions
                        .entry(*origin)
                        .and_modify(|c| {
                            if contribution.normalized_score > c.normalized_score {
                                c.normalized_score = contribution.normalized_score;
                            }
                            c.rank = c.rank.min(contribution.rank);
                        })
                        .or_insert(contribution);
                    // Represent with the highest-priority origin's candidate.
                    if origin.priority() < existing.representative.origin.priority() {
                        existing.representative = candidate.clone();
                    }
                }
            }
        }
    }

    let mut results: Vec<FusedResult> = by_source
        .into_values()
        .map(|mut fused| {
            fused.fused_score = score_contributions(&fused.contributions, weights);
            fused
        })
        .collect();
    sort_results(&mut results);
    results
}
