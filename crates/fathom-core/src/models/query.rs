use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque tenant/department access predicate.
///
/// Produced by the auth layer and enforced by the storage backends; this
/// subsystem only threads it through to the adapter calls unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantFilter(pub serde_json::Value);

/// A retrieval request, immutable once submitted.
///
/// Validation (non-empty text, sane `top_k`) happens at the pipeline
/// boundary, not here — construction never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Unique id for this request, used for log correlation.
    pub query_id: Uuid,
    /// Free-text query.
    pub text: String,
    /// Entity mentions extracted upstream; drives graph planning.
    pub entity_mentions: Vec<String>,
    /// Opaque access filter, threaded through to every backend call.
    pub tenant_filter: Option<TenantFilter>,
    /// Requested result count. 0 means "use the configured default".
    pub top_k: usize,
    /// Conversation/session the request belongs to.
    pub session_id: String,
    /// When this subsystem received the query.
    pub received_at: DateTime<Utc>,
}

impl Query {
    /// Build a query with a fresh id and receipt timestamp.
    pub fn new(text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            query_id: Uuid::new_v4(),
            text: text.into(),
            entity_mentions: Vec::new(),
            tenant_filter: None,
            top_k: 0,
            session_id: session_id.into(),
            received_at: Utc::now(),
        }
    }

    pub fn with_entity_mentions(mut self, mentions: Vec<String>) -> Self {
        self.entity_mentions = mentions;
        self
    }

    pub fn with_tenant_filter(mut self, filter: TenantFilter) -> Self {
        self.tenant_filter = Some(filter);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
