//! Backend adapters: the uniform `fetch` surface over the three external
//! retrieval clients.
//!
//! Each adapter enforces the per-call deadline, maps transport failures to
//! [`BackendError`], applies the configured raw-score floor, and returns
//! candidates in descending raw-score order — list position is the origin
//! rank the fusion stage consumes. Scale heterogeneity between origins is
//! deliberately left alone here; fusion resolves it centrally.

mod graph;
mod keyword;
mod retry;
mod vector;

pub use graph::GraphAdapter;
pub use keyword::KeywordAdapter;
pub use retry::RetryPolicy;
pub use vector::VectorAdapter;

use fathom_core::models::{Candidate, Origin};

/// Retag, floor-filter, order, and truncate one backend's raw hits.
///
/// Non-finite scores are discarded outright; a backend emitting NaN must not
/// be able to poison the downstream sort.
pub(crate) fn finalize(
    origin: Origin,
    min_score: f64,
    limit: usize,
    candidates: Vec<Candidate>,
) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| c.raw_score.is_finite() && c.raw_score >= min_score)
        .map(|mut c| {
            c.origin = origin;
            c
        })
        .collect();
    kept.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.source_id.cmp(&b.source_id))
    });
    kept.truncate(limit);
    kept
}
