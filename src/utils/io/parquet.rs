//! Parquet file operations
//!
//! Input files are read into arrow record batches, projected onto the columns
//! a record variant knows about. Output batches are written with the default
//! writer properties.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};

use crate::error::Result;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Batch size from `PARQUET_BATCH_SIZE`, if set
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var("PARQUET_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

/// Builds a projection onto the columns of `schema` present in the file
///
/// # Arguments
/// * `schema` - Columns the record variant knows about
/// * `file_schema` - Arrow schema of the parquet file
/// * `parquet_schema` - Parquet schema descriptor from the reader builder
///
/// # Returns
/// A projection mask over the matching root columns, or `None` when no column
/// matches, in which case every column is read
#[must_use]
pub fn create_projection(
    schema: &Schema,
    file_schema: &Schema,
    parquet_schema: &parquet::schema::types::SchemaDescriptor,
) -> Option<ProjectionMask> {
    let projection = schema
        .fields()
        .iter()
        .filter_map(|f| match file_schema.index_of(f.name()) {
            Ok(idx) => Some(idx),
            Err(_) => {
                log::debug!("Column {} not found in parquet file, reading as null", f.name());
                None
            }
        })
        .collect_vec();

    if projection.is_empty() {
        log::warn!("No matching columns found for projection, reading all columns");
        None
    } else {
        Some(ProjectionMask::roots(parquet_schema, projection))
    }
}

/// Reads a parquet file into arrow record batches
///
/// # Arguments
/// * `path` - File to read
/// * `schema` - Optional schema to project the file onto
///
/// # Returns
/// Every record batch of the file, in file order
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid parquet
pub fn read_parquet(path: &Path, schema: Option<&Schema>) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE));

    let projection = schema.and_then(|schema| {
        create_projection(schema, builder.schema(), builder.parquet_schema())
    });
    let reader = match projection {
        Some(mask) => builder.with_projection(mask).build()?,
        None => builder.build()?,
    };

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();

    log_operation_complete("read", path, rows, start.elapsed());
    Ok(batches)
}

/// Writes one record batch to a new parquet file
///
/// # Arguments
/// * `path` - File to create; an existing file is overwritten
/// * `batch` - Batch to write
///
/// # Errors
/// Returns an error if the file cannot be created or the batch cannot be encoded
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let start = Instant::now();
    log_operation_start("Writing parquet file", path);

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;

    log_operation_complete("wrote", path, batch.num_rows(), start.elapsed());
    Ok(())
}
