//! # fathom-core
//!
//! Foundation crate for the Fathom hybrid retrieval pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{FusionWeights, RetrievalConfig};
pub use errors::{BackendError, FathomError, FathomResult, RerankError};
pub use models::{
    Candidate, Citation, ContentSpan, FusedResult, Origin, Query, RerankedResult,
    RetrievalResponse, TenantFilter,
};
