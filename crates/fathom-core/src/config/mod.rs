//! Pipeline configuration.
//!
//! Every tunable the fusion/dedup/rerank stages use lives here, validated
//! up front so the stages themselves never have to guard against nonsense
//! weights or thresholds.

pub mod defaults;
mod retrieval_config;

pub use retrieval_config::{FusionWeights, RetrievalConfig};
