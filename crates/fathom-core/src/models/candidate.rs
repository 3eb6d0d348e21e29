use serde::{Deserialize, Serialize};

use super::origin::Origin;

/// Byte-offset span into a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSpan {
    pub start: usize,
    pub end: usize,
}

impl ContentSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the overlap between two spans (0 if disjoint).
    pub fn overlap_len(&self, other: &ContentSpan) -> usize {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }

    /// Overlap as a fraction of the shorter span's length.
    ///
    /// Two zero-length spans never overlap (fraction 0.0).
    pub fn overlap_fraction(&self, other: &ContentSpan) -> f64 {
        let shorter = self.len().min(other.len());
        if shorter == 0 {
            return 0.0;
        }
        self.overlap_len(other) as f64 / shorter as f64
    }
}

/// One unranked retrieval hit from a single backend, before fusion.
///
/// Produced by exactly one adapter call; downstream stages wrap it but never
/// mutate it. `raw_score` is on whatever scale is natural for the origin
/// (cosine similarity, path weight, term frequency) — scale heterogeneity is
/// resolved centrally in fusion, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Chunk identity, unique within a backend's corpus view.
    pub source_id: String,
    /// Parent document identity; span dedup groups by this.
    pub doc_id: String,
    /// Which backend produced this hit.
    pub origin: Origin,
    /// Backend-native relevance score.
    pub raw_score: f64,
    /// Where in the source document the snippet came from.
    pub span: ContentSpan,
    /// Display/rerank text for the hit.
    pub snippet: String,
    /// Arbitrary backend metadata (title, page, …).
    pub metadata: serde_json::Value,
}

impl Candidate {
    pub fn new(
        source_id: impl Into<String>,
        doc_id: impl Into<String>,
        origin: Origin,
        raw_score: f64,
        span: ContentSpan,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            doc_id: doc_id.into(),
            origin,
            raw_score,
            span,
            snippet: snippet.into(),
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
