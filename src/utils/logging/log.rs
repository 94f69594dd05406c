//! Consistent log lines for file operations and data conditions

use std::path::Path;
use std::time::Duration;

use crate::error::DqError;

/// Logs the start of an operation on a file
///
/// # Arguments
/// * `operation` - What is being done, e.g. "Reading parquet file"
/// * `path` - File the operation works on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Logs the completion of an operation on a file
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "read"
/// * `path` - File the operation worked on
/// * `items` - Number of records processed
/// * `elapsed` - Time the operation took
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Duration) {
    log::info!(
        "Successfully {} {} records ({}) in {:?}",
        operation,
        items,
        path.display(),
        elapsed
    );
}

/// Log a data condition that was recorded instead of aborting the run
pub fn log_condition(error: &DqError) {
    log::warn!("Data condition: {error}");
}
