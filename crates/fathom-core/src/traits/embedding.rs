use std::future::Future;

use crate::errors::BackendError;

/// Produces the query-text embedding the vector backend searches with.
///
/// Embedding generation is an external collaborator; the vector adapter only
/// threads the result through. A failure here disables the vector origin for
/// the request, reported as a vector backend failure.
pub trait QueryEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, BackendError>> + Send;
}
