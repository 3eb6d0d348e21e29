//! Contracts for the external services the pipeline calls.
//!
//! The stores, the embedding model, and the cross-encoder are all external
//! collaborators; these traits are the only surface this subsystem sees.
//! Every method takes the remaining deadline budget and must return within
//! it — an empty result list is success, never an error.

pub mod backends;
pub mod embedding;
pub mod reranker;

pub use backends::{GraphClient, KeywordClient, VectorSearchClient};
pub use embedding::QueryEmbedder;
pub use reranker::RerankerClient;
