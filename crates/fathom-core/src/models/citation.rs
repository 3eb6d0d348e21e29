use serde::{Deserialize, Serialize};

use super::candidate::ContentSpan;

/// Stable ordinal reference to one final result, for the lifetime of a
/// single response. Never persisted by this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// 1..N, contiguous, unique within the response.
    pub index: usize,
    pub source_id: String,
    pub span: ContentSpan,
    /// Human-readable reference, e.g. `[2] Master Lease Agreement`.
    pub display_text: String,
}
