//! Data quality scoring for pre-cleaned hospital episode records.
//!
//! Records are scored per partition (data-collection year): duplicates are
//! grouped on their natural key, every record receives a quality code per
//! check, and per-check weights derived from the whole partition turn those
//! codes into one adjusted total per record.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Core types
pub use config::PipelineConfig;
pub use error::{DqError, Result};

// Record variants and scored output
pub use models::{
    CheckCategory, CheckDef, CheckScore, CheckWeights, DqRecord, EpisodeRecord, MaternityRecord,
    QualityCode, ScoredPartition, ScoredRecord,
};

// Pipeline
pub use algorithm::pipeline::{PartitionSummary, PipelineOutput, QualityPipeline};
pub use algorithm::quality::{QualityRules, ScoringContext};

// Arrow types
pub use arrow::record_batch::RecordBatch;
