use std::future::Future;
use std::time::Duration;

use crate::errors::BackendError;
use crate::models::{Candidate, TenantFilter};

/// Dense vector similarity search over an external index.
pub trait VectorSearchClient: Send + Sync {
    /// Return up to `limit` nearest candidates for `embedding`, honoring
    /// `deadline` as a hard bound on the call.
    fn search(
        &self,
        embedding: &[f32],
        tenant_filter: Option<&TenantFilter>,
        limit: usize,
        deadline: Duration,
    ) -> impl Future<Output = Result<Vec<Candidate>, BackendError>> + Send;
}

/// Entity-graph traversal over an external graph store.
pub trait GraphClient: Send + Sync {
    /// Traverse up to `max_hops` from the given entity mentions and return
    /// up to `limit` connected passages.
    fn traverse(
        &self,
        entity_mentions: &[String],
        max_hops: u8,
        tenant_filter: Option<&TenantFilter>,
        limit: usize,
        deadline: Duration,
    ) -> impl Future<Output = Result<Vec<Candidate>, BackendError>> + Send;
}

/// Lexical/keyword search over an external text index.
pub trait KeywordClient: Send + Sync {
    fn search(
        &self,
        text: &str,
        tenant_filter: Option<&TenantFilter>,
        limit: usize,
        deadline: Duration,
    ) -> impl Future<Output = Result<Vec<Candidate>, BackendError>> + Send;
}
