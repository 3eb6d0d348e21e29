use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::origin::Origin;

/// One origin's contribution to a fused result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginContribution {
    /// Min-max normalized score within that origin's candidate list, [0, 1].
    pub normalized_score: f64,
    /// Best (lowest) 0-based rank this source held in that origin's list.
    pub rank: usize,
}

/// One or more candidates sharing a post-dedup identity, with a single
/// comparable fused score.
///
/// Invariant: `fused_score` is a deterministic function of `contributions`
/// and the configured origin weights — same inputs always yield the same
/// score. The fusion stage owns that computation; this type only carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedResult {
    /// The candidate chosen to represent this result (snippet, span, metadata).
    pub representative: Candidate,
    /// Per-origin normalized contributions. BTreeMap keeps iteration in the
    /// fixed origin priority order, so downstream tie-breaks are deterministic.
    pub contributions: BTreeMap<Origin, OriginContribution>,
    /// Weighted sum over `contributions`.
    pub fused_score: f64,
    /// Snippets merged in from span-overlapping duplicates, if any.
    pub merged_snippets: Vec<String>,
}

impl FusedResult {
    /// Number of distinct backends that returned this source.
    pub fn origin_count(&self) -> usize {
        self.contributions.len()
    }

    /// Highest-priority contributing origin (lowest priority value).
    ///
    /// `contributions` is never empty for a fused result, but the accessor
    /// stays total rather than panicking.
    pub fn best_origin_priority(&self) -> u8 {
        self.contributions
            .keys()
            .map(|o| o.priority())
            .min()
            .unwrap_or(u8::MAX)
    }

    /// Best original rank across all contributing origins.
    pub fn best_rank(&self) -> usize {
        self.contributions
            .values()
            .map(|c| c.rank)
            .min()
            .unwrap_or(usize::MAX)
    }

    /// Contributing origins in priority order.
    pub fn origins(&self) -> Vec<Origin> {
        self.contributions.keys().copied().collect()
    }
}
