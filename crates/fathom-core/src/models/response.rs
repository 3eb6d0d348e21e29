use serde::{Deserialize, Serialize};

use super::candidate::ContentSpan;

/// One cited entry in the final response, in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitedResult {
    pub citation_index: usize,
    pub source_id: String,
    pub span: ContentSpan,
    pub snippet: String,
    /// Reference line the answer generator can render verbatim.
    pub display_text: String,
    pub final_score: f64,
    /// Names of the backends that contributed, in priority order.
    pub origins: Vec<String>,
}

/// Output handed to the answer-generation layer.
///
/// A degraded response still carries best-effort ranked results; fatal
/// failures are returned as errors instead, never as a silently empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResponse {
    pub results: Vec<CitedResult>,
    /// True when any planned backend failed or reranking was skipped.
    pub degraded: bool,
    /// Human-readable notes on what degraded and why.
    pub warnings: Vec<String>,
    /// End-to-end pipeline time.
    pub elapsed_ms: u64,
}
