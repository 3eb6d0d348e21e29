//! Span-overlap deduplication of fused results.
//!
//! Fusion already merged identical source ids; what remains are overlapping
//! chunk windows from ingestion — different chunk ids covering mostly the
//! same text in one document. Results whose spans overlap at least the
//! configured fraction of the shorter span are collapsed.
//!
//! Per document: sort by span start and sweep once, comparing each result to
//! the current cluster's covered range — O(n log n), not pairwise O(n²).

use std::collections::HashMap;

use fathom_core::config::FusionWeights;
use fathom_core::models::{ContentSpan, FusedResult};
use tracing::debug;

use crate::fusion::{score_contributions, sort_results};

struct Cluster {
    result: FusedResult,
    /// Union of every merged span; overlap tests run against this, not the
    /// representative's own span, so a wide early chunk still absorbs later
    /// windows inside it.
    cover: ContentSpan,
}

/// Collapse span-overlapping duplicates and re-rank.
///
/// The higher-fused input becomes the representative; contributions are
/// unioned (max normalized score and best rank per origin) and the merged
/// score is recomputed with the fusion scoring function, so duplicates found
/// by different backends rank above either standalone input.
pub fn dedup(
    results: Vec<FusedResult>,
    overlap_threshold: f64,
    weights: &FusionWeights,
) -> Vec<FusedResult> {
    let input_len = results.len();
    let mut by_doc: HashMap<String, Vec<FusedResult>> = HashMap::new();
    for result in results {
        by_doc
            .entry(result.representative.doc_id.clone())
            .or_default()
            .push(result);
    }

    let mut deduped = Vec::with_capacity(input_len);
    for (_, mut doc_results) in by_doc {
        doc_results.sort_by_key(|r| (r.representative.span.start, r.representative.span.end));

        let mut clusters: Vec<Cluster> = Vec::new();
        for result in doc_results {
            let span = result.representative.span;
            // Greedy single pass: each span is tested against the newest
            // cluster's cover only. A window overlapping two clusters joins
            // the newer one, so representatives of adjacent clusters can
            // still overlap above the threshold; source ids stay unique.
            match clusters.last_mut() {
                Some(cluster) if cluster.cover.overlap_fraction(&span) >= overlap_threshold => {
                    merge_into(cluster, result, weights);
                }
                _ => clusters.push(Cluster {
                    cover: span,
                    result,
                }),
            }
        }
        deduped.extend(clusters.into_iter().map(|c| c.result));
    }

    if deduped.len() < input_len {
        debug!(
            input = input_len,
            output = deduped.len(),
            "collapsed overlapping spans"
        );
    }
    sort_results(&mut deduped);
    deduped
}

fn merge_into(cluster: &mut Cluster, incoming: FusedResult, weights: &FusionWeights) {
    cluster.cover = ContentSpan::new(
        cluster.cover.start.min(incoming.representative.span.start),
        cluster.cover.end.max(incoming.representative.span.end),
    );

    let kept = &mut cluster.result;
    let incoming_wins = incoming.fused_score > kept.fused_score;

    // Union contributions: best showing per origin across both inputs.
    for (origin, contribution) in incoming.contributions {
        kept.contributions
            .entry(origin)
            .and_modify(|c| {
                if contribution.normalized_score > c.normalized_score {
                    c.normalized_score = contribution.normalized_score;
                }
                c.rank = c.rank.min(contribution.rank);
            })
            .or_insert(contribution);
    }

    kept.merged_snippets.extend(incoming.merged_snippets);
    if incoming_wins {
        let displaced =
            std::mem::replace(&mut kept.representative, incoming.representative).snippet;
        kept.merged_snippets.push(displaced);
    } else {
        kept.merged_snippets.push(incoming.representative.snippet);
    }

    kept.fused_score = score_contributions(&kept.contributions, weights);
}
