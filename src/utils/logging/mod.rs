//! Logging and progress reporting

pub mod log;
pub mod progress;

pub use log::{log_condition, log_operation_complete, log_operation_start};
pub use progress::{
    create_main_progress_bar, create_multi_progress, create_record_progress_bar, create_spinner,
    finish_progress_bar,
};
