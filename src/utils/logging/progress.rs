//! Progress bars for partition scoring
//!
//! Bars are only drawn when the pipeline is configured to show progress;
//! otherwise a hidden bar is returned so callers never branch on it.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Style of the bar tracking partitions
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} partitions {msg}";

/// Style of the bar tracking records within one partition
pub const DEFAULT_RECORD_TEMPLATE: &str =
    "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

fn bar_style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Creates the bar tracking the partitions of a run.
///
/// # Arguments
/// * `length` - Number of partitions
/// * `show` - Whether the bar is drawn
///
/// # Returns
/// A styled bar, or a hidden one when `show` is false
#[must_use]
pub fn create_main_progress_bar(length: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(length);
    pb.set_style(bar_style(DEFAULT_MAIN_TEMPLATE));
    pb
}

/// Creates the bar tracking the records of one partition.
///
/// # Arguments
/// * `length` - Number of records in the partition
/// * `description` - Message shown next to the bar, usually variant and year
/// * `show` - Whether the bar is drawn
///
/// # Returns
/// A styled bar, or a hidden one when `show` is false
#[must_use]
pub fn create_record_progress_bar(length: u64, description: &str, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(length);
    pb.set_style(bar_style(DEFAULT_RECORD_TEMPLATE));
    pb.set_message(description.to_string());
    pb
}

/// Creates a `MultiProgress` holding the partition bar.
///
/// Record bars added to the returned `MultiProgress` are drawn below the
/// partition bar instead of over it.
///
/// # Arguments
/// * `total` - Number of partitions in the run
/// * `show` - Whether anything should be drawn at all
///
/// # Returns
/// The `MultiProgress` and its partition bar. Both draw nothing when `show` is false.
#[must_use]
pub fn create_multi_progress(total: u64, show: bool) -> (MultiProgress, ProgressBar) {
    let mp = if show {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    };
    let main_pb = mp.add(create_main_progress_bar(total, show));
    (mp, main_pb)
}

/// Creates a spinner for work of unknown length, such as reading a parquet file.
///
/// # Arguments
/// * `message` - Message shown next to the spinner
///
/// # Returns
/// A spinner that ticks on its own until finished
#[must_use]
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finishes a bar, optionally leaving a final message in place of it.
///
/// # Arguments
/// * `pb` - The bar to finish
/// * `message` - Final message, or `None` to keep the last one
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    match message {
        Some(msg) => pb.finish_with_message(msg.to_string()),
        None => pb.finish(),
    }
}
