use serde::{Deserialize, Serialize};

use super::fused::FusedResult;

/// A fused result after cross-encoder reranking and cutoff filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerankedResult {
    pub fused: FusedResult,
    /// Cross-encoder score on the model's native scale; equals `fused_score`
    /// when the pipeline fell back to fusion order.
    pub final_score: f64,
    /// 1-based, dense, no gaps.
    pub rank: usize,
}
