//! Cross-field checks within one record
//!
//! Some fields only make sense conditionally on a sibling field: the tail of a
//! maternity record should hold exactly as many babies as were delivered. The
//! gated rule captures that shape; record-specific consistency checks live in
//! the per-variant tables.

pub mod birth_weight;
pub mod episode;
pub mod maternity;

use crate::models::{CheckDef, CheckScore, QualityCode};

pub use birth_weight::BirthWeightPlausibilityScorer;

/// One entry of an intra-record check table
#[derive(Debug, Clone, Copy)]
pub struct IntraCheck<R> {
    pub def: CheckDef,
    pub eval: fn(&R) -> QualityCode,
}

/// Score a field whose presence is governed by a sibling field.
///
/// `classify` maps a populated value to its sentinel, valid or illegal code.
pub fn gated<T>(
    expected: bool,
    value: Option<T>,
    classify: impl FnOnce(T) -> QualityCode,
) -> QualityCode {
    match (expected, value) {
        (false, None) => QualityCode::Valid,
        (false, Some(_)) => QualityCode::Illegal,
        (true, None) => QualityCode::Missing,
        (true, Some(value)) => classify(value),
    }
}

/// Scores cross-field consistency against a check table
pub struct IntraRecordScorer;

impl IntraRecordScorer {
    /// Append one score per table entry to `out`
    pub fn score_into<R>(record: &R, checks: &[IntraCheck<R>], out: &mut Vec<CheckScore>) {
        out.extend(
            checks
                .iter()
                .map(|check| CheckScore::new(check.def, (check.eval)(record))),
        );
    }

    #[must_use]
    pub fn score<R>(record: &R, checks: &[IntraCheck<R>]) -> Vec<CheckScore> {
        let mut out = Vec::with_capacity(checks.len());
        Self::score_into(record, checks, &mut out);
        out
    }
}
