//! Cross-encoder reranking of the fused top-N, with graceful fallback.
//!
//! The reranker is a single sequential step after fan-in, under its own
//! timeout distinct from the fan-out deadline. It may drop results the
//! fusion heuristic overrated (cutoff), but its unavailability must never
//! fail the request — the pipeline falls back to fusion order instead.

use std::time::Duration;

use fathom_core::config::RetrievalConfig;
use fathom_core::errors::RerankError;
use fathom_core::models::{FusedResult, RerankedResult};
use fathom_core::traits::RerankerClient;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Reranked results plus the degradation bookkeeping the response needs.
#[derive(Debug)]
pub struct RerankOutcome {
    pub results: Vec<RerankedResult>,
    pub degraded: bool,
    pub warnings: Vec<String>,
}

/// Rerank the top fused results and cut to `top_k`.
///
/// `fused` must already be in fusion rank order; only the first
/// `rerank_top_n` entries are scored.
pub async fn rerank<R: RerankerClient>(
    reranker: &R,
    query_text: &str,
    mut fused: Vec<FusedResult>,
    config: &RetrievalConfig,
    top_k: usize,
) -> RerankOutcome {
    fused.truncate(config.rerank_top_n);
    if fused.is_empty() {
        return RerankOutcome {
            results: Vec::new(),
            degraded: false,
            warnings: Vec::new(),
        };
    }

    let deadline = Duration::from_millis(config.rerank_timeout_ms);
    let passages: Vec<&str> = fused
        .iter()
        .map(|f| f.representative.snippet.as_str())
        .collect();

    let scores = match timeout(deadline, reranker.score(query_text, &passages, deadline)).await {
        Err(_) => Err(RerankError::Timeout {
            deadline_ms: config.rerank_timeout_ms,
        }),
        Ok(Err(err)) => Err(err),
        Ok(Ok(scores)) if scores.len() != passages.len() => Err(RerankError::Misaligned {
            expected: passages.len(),
            got: scores.len(),
        }),
        Ok(Ok(scores)) => Ok(scores),
    };

    match scores {
        Ok(scores) => {
            let mut scored: Vec<RerankedResult> = fused
                .into_iter()
                .zip(scores)
                .filter(|(_, score)| *score >= config.rerank_cutoff)
                .map(|(fused, final_score)| RerankedResult {
                    fused,
                    final_score,
                    rank: 0,
                })
                .collect();
            // Stable sort: ties keep fusion order.
            scored.sort_by(|a, b| {
                b.final_score
                    .partial_cmp(&a.final_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            scored.truncate(top_k);
            for (i, result) in scored.iter_mut().enumerate() {
                result.rank = i + 1;
            }
            debug!(results = scored.len(), "reranking complete");
            RerankOutcome {
                results: scored,
                degraded: false,
                warnings: Vec::new(),
            }
        }
        Err(err) => {
            warn!(error = %err, "reranker failed, falling back to fusion order");
            let mut results: Vec<RerankedResult> = fused
                .into_iter()
                .take(top_k)
                .map(|fused| {
                    let final_score = fused.fused_score;
                    RerankedResult {
                        fused,
                        final_score,
                        rank: 0,
                    }
                })
                .collect();
            for (i, result) in results.iter_mut().enumerate() {
                result.rank = i + 1;
            }
            RerankOutcome {
                results,
                degraded: true,
                warnings: vec![format!("reranking skipped: {err}")],
            }
        }
    }
}
