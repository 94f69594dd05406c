//! Data quality algorithms
//!
//! Deduplication groups records sharing a natural key, quality scoring assigns
//! codes per check, and the pipeline ties both together per partition.

pub mod dedup;
pub mod pipeline;
pub mod quality;
