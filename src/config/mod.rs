//! Configuration for the scoring pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DqError, Result};

/// Default number of records below which a partition is scored sequentially
pub const DEFAULT_MIN_PARALLEL_RECORDS: usize = 2048;

/// Configuration for the scoring pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of worker threads (None uses rayon's global pool)
    pub num_threads: Option<usize>,
    /// Whether to draw progress bars while scoring partitions
    pub show_progress: bool,
    /// Partitions smaller than this are scored on the calling thread
    pub min_parallel_records: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            show_progress: false,
            min_parallel_records: DEFAULT_MIN_PARALLEL_RECORDS,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a dedicated pool with the given number of threads
    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Enable or disable progress bars
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Set the record count at which scoring switches to parallel execution
    #[must_use]
    pub fn with_min_parallel_records(mut self, min_parallel_records: usize) -> Self {
        self.min_parallel_records = min_parallel_records;
        self
    }

    /// Number of threads the pipeline will run on
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(DqError::config("num_threads must be greater than zero"));
        }
        Ok(())
    }
}
