//! Core trait implemented by every scorable record variant

use std::fmt::Debug;

use arrow::datatypes::FieldRef;
use chrono::{Datelike, NaiveDate};

/// Dates submitted in place of a missing (1800-01-01) or invalid (1801-01-01) date
pub const SENTINEL_DATES: [(i32, u32, u32); 2] = [(1800, 1, 1), (1801, 1, 1)];

/// Whether a date is one of the null-date sentinels
#[must_use]
pub fn is_sentinel_date(date: NaiveDate) -> bool {
    SENTINEL_DATES
        .iter()
        .any(|&(y, m, d)| date.year() == y && date.month() == m && date.day() == d)
}

/// A date with the null-date sentinels read as absent
#[must_use]
pub fn known_date(date: Option<NaiveDate>) -> Option<NaiveDate> {
    date.filter(|&d| !is_sentinel_date(d))
}

/// A pre-cleaned episode record that can pass through the scoring pipeline.
///
/// The trait exposes what deduplication and inter-record sequencing need:
/// the natural key, the entity the record belongs to and the date that orders
/// an entity's records in time.
pub trait DqRecord: Send + Sync + Debug {
    /// Natural key; records with equal keys describe the same event
    type Key: Ord + Clone + Send + Sync + Debug;

    /// Name of the dataset variant, used in log output
    const VARIANT: &'static str;

    /// Natural key of this record
    fn natural_key(&self) -> Self::Key;

    /// Identifier of the entity (patient) the record belongs to
    fn entity_id(&self) -> Option<&str>;

    /// Date ordering this record among its entity's records; sentinel dates
    /// are reported as None
    fn occurrence_date(&self) -> Option<NaiveDate>;

    /// Number of attribute fields holding a value
    fn populated_field_count(&self) -> usize;

    /// Arrow fields describing the record's columns
    fn arrow_fields() -> Vec<FieldRef>;
}

/// Count the `Some` values among a record's optional attributes
#[macro_export]
macro_rules! count_populated {
    ($($field:expr),+ $(,)?) => {
        0usize $(+ usize::from($field.is_some()))+
    };
}
