//! Declarative rule types for single field checks
//!
//! A rule is plain data: value ranges, sentinel codes and date limits. The
//! evaluation order is the same for every rule of a kind, so a field's
//! behaviour can be read off its table entry.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::algorithm::quality::ScoringContext;
use crate::models::QualityCode;

/// Earliest year an episode date can legally fall in
pub const EARLIEST_EPISODE_YEAR: i32 = 1989;

/// Earliest year a date of birth can legally fall in
pub const EARLIEST_BIRTH_YEAR: i32 = 1890;

/// Age above which a date of birth is doubtful
pub const MAX_PLAUSIBLE_AGE: i32 = 115;

pub use crate::models::record::{SENTINEL_DATES, is_sentinel_date};

/// Rule for an integer-coded field
///
/// Evaluation order: null, sentinels, valid, doubtful, infeasible, illegal.
#[derive(Debug, Clone)]
pub struct IntRule {
    pub sentinels: &'static [(i32, QualityCode)],
    pub valid: &'static [RangeInclusive<i32>],
    pub doubtful: &'static [RangeInclusive<i32>],
    pub infeasible: &'static [RangeInclusive<i32>],
}

impl IntRule {
    /// A rule accepting only the given ranges
    #[must_use]
    pub const fn valid(valid: &'static [RangeInclusive<i32>]) -> Self {
        Self {
            sentinels: &[],
            valid,
            doubtful: &[],
            infeasible: &[],
        }
    }

    #[must_use]
    pub const fn with_sentinels(mut self, sentinels: &'static [(i32, QualityCode)]) -> Self {
        self.sentinels = sentinels;
        self
    }

    #[must_use]
    pub const fn with_doubtful(mut self, doubtful: &'static [RangeInclusive<i32>]) -> Self {
        self.doubtful = doubtful;
        self
    }

    #[must_use]
    pub const fn with_infeasible(mut self, infeasible: &'static [RangeInclusive<i32>]) -> Self {
        self.infeasible = infeasible;
        self
    }

    /// Sentinel code for `value`, if it is one
    #[must_use]
    pub fn sentinel(&self, value: i32) -> Option<QualityCode> {
        self.sentinels
            .iter()
            .find(|(sentinel, _)| *sentinel == value)
            .map(|&(_, code)| code)
    }

    /// Whether `value` falls in a valid range
    #[must_use]
    pub fn is_valid(&self, value: i32) -> bool {
        self.valid.iter().any(|range| range.contains(&value))
    }

    #[must_use]
    pub fn evaluate(&self, value: Option<i32>) -> QualityCode {
        let Some(value) = value else {
            return QualityCode::Missing;
        };
        if let Some(code) = self.sentinel(value) {
            return code;
        }
        if self.is_valid(value) {
            QualityCode::Valid
        } else if self.doubtful.iter().any(|range| range.contains(&value)) {
            QualityCode::Doubtful
        } else if self.infeasible.iter().any(|range| range.contains(&value)) {
            QualityCode::Infeasible
        } else {
            QualityCode::Illegal
        }
    }
}

/// Accepted values of a text-coded field
#[derive(Debug, Clone, Copy)]
pub enum CodeSet {
    /// An explicit list of codes
    Listed(&'static [&'static str]),
    /// Codes with a recognisable shape (e.g. ICD-10)
    Matching(fn(&str) -> bool),
}

impl CodeSet {
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Listed(codes) => codes.contains(&value),
            Self::Matching(accepts) => accepts(value),
        }
    }
}

/// Rule for a text-coded field
///
/// Evaluation order: null, sentinels, accepted codes, illegal.
#[derive(Debug, Clone)]
pub struct CodeRule {
    pub sentinels: &'static [(&'static str, QualityCode)],
    pub accepted: CodeSet,
}

impl CodeRule {
    #[must_use]
    pub const fn listed(codes: &'static [&'static str]) -> Self {
        Self {
            sentinels: &[],
            accepted: CodeSet::Listed(codes),
        }
    }

    #[must_use]
    pub const fn matching(accepts: fn(&str) -> bool) -> Self {
        Self {
            sentinels: &[],
            accepted: CodeSet::Matching(accepts),
        }
    }

    #[must_use]
    pub const fn with_sentinels(mut self, sentinels: &'static [(&'static str, QualityCode)]) -> Self {
        self.sentinels = sentinels;
        self
    }

    #[must_use]
    pub fn sentinel(&self, value: &str) -> Option<QualityCode> {
        self.sentinels
            .iter()
            .find(|(sentinel, _)| *sentinel == value)
            .map(|&(_, code)| code)
    }

    #[must_use]
    pub fn evaluate(&self, value: Option<&str>) -> QualityCode {
        let Some(value) = value else {
            return QualityCode::Missing;
        };
        if let Some(code) = self.sentinel(value) {
            return code;
        }
        if self.accepted.contains(value) {
            QualityCode::Valid
        } else {
            QualityCode::Illegal
        }
    }
}

/// Rule for a date field, interpreted against the partition's reference year
///
/// Evaluation order: null or sentinel date, before `earliest_year`, after the
/// reference year, older than `max_age_years`, valid.
#[derive(Debug, Clone)]
pub struct DateRule {
    pub earliest_year: i32,
    pub max_age_years: Option<i32>,
}

impl DateRule {
    #[must_use]
    pub fn evaluate(&self, value: Option<NaiveDate>, ctx: &ScoringContext) -> QualityCode {
        let Some(date) = value.filter(|&d| !is_sentinel_date(d)) else {
            return QualityCode::Missing;
        };
        let year = date.year();

        if year < self.earliest_year {
            return QualityCode::Illegal;
        }
        if year > ctx.reference_year {
            return QualityCode::Infeasible;
        }
        match self.max_age_years {
            Some(max_age) if ctx.reference_year - year > max_age => QualityCode::Doubtful,
            _ => QualityCode::Valid,
        }
    }
}

/// Date of a clinical episode (start, end, admission)
pub const EPISODE_DATE: DateRule = DateRule {
    earliest_year: EARLIEST_EPISODE_YEAR,
    max_age_years: None,
};

/// Date of birth of a patient
pub const BIRTH_DATE: DateRule = DateRule {
    earliest_year: EARLIEST_BIRTH_YEAR,
    max_age_years: Some(MAX_PLAUSIBLE_AGE),
};

/// Pseudonymised patient identifiers: 1-32 ASCII alphanumerics
pub const PATIENT_ID: CodeRule = CodeRule::matching(is_patient_id);

fn is_patient_id(value: &str) -> bool {
    (1..=32).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Whether a code has the shape of an ICD-10 code: a letter, two digits and
/// up to three further alphanumerics or dots (e.g. `O80`, `J45.0`, `O800X`)
#[must_use]
pub fn is_icd10_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    (3..=6).contains(&bytes.len())
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3..]
            .iter()
            .all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'.')
}
