//! Data model for the retrieval pipeline.
//!
//! Each stage exclusively owns the list it produces and hands an immutable
//! view to the next stage; objects are wrapped, never mutated in place.

pub mod candidate;
pub mod citation;
pub mod fused;
pub mod origin;
pub mod query;
pub mod reranked;
pub mod response;

pub use candidate::{Candidate, ContentSpan};
pub use citation::Citation;
pub use fused::{FusedResult, OriginContribution};
pub use origin::Origin;
pub use query::{Query, TenantFilter};
pub use reranked::RerankedResult;
pub use response::{CitedResult, RetrievalResponse};
