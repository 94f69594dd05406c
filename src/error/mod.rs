//! Error handling for the scoring pipeline.
//!
//! Field-level problems never surface here: a missing or illegal value is a
//! quality code, not an error. `DqError` covers the conditions a caller has to
//! act on (an empty partition, a misconfigured pipeline) and failures at the
//! arrow/parquet boundary.

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Errors raised by the scoring engine and its batch boundary
#[derive(Debug, Error)]
pub enum DqError {
    /// A partition contained no records, so no weight can be derived for it
    #[error("partition {partition} contains no records; check weights are undefined")]
    EmptyPartition {
        /// Partition key (data-collection year)
        partition: i32,
    },

    /// Score cards within one partition do not share the same check layout
    #[error("check layout mismatch at position {position}: expected '{expected}', found '{found}'")]
    CheckMismatch {
        /// Index of the offending check in the score card
        position: usize,
        /// Check name the weights were derived for
        expected: String,
        /// Check name found on the score card
        found: String,
    },

    /// Invalid pipeline configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure building or reading arrow data
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Failure reading or writing parquet data
    #[error("parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Failure converting records to or from arrow
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// Failure parsing a JSON configuration file
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl DqError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error describes a data condition rather than a failure
    #[must_use]
    pub const fn is_data_condition(&self) -> bool {
        matches!(self, Self::EmptyPartition { .. })
    }
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, DqError>;
