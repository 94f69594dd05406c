//! Arrow conversion, parquet I/O and logging helpers

pub mod arrow;
pub mod io;
pub mod logging;

pub use io::parquet::DEFAULT_BATCH_SIZE;
