//! Single field checks
//!
//! Every field of a record variant has one table entry pairing an accessor
//! with its rule. Scoring a record walks the table in order.

pub mod episode;
pub mod maternity;
pub mod rules;

use chrono::NaiveDate;

use crate::algorithm::quality::ScoringContext;
use crate::models::{CheckDef, CheckScore, QualityCode};
use rules::{CodeRule, DateRule, IntRule};

/// How a field is read from a record and which rule applies to it
#[derive(Debug, Clone)]
pub enum FieldAccess<R> {
    Int(fn(&R) -> Option<i32>, IntRule),
    Code(fn(&R) -> Option<&str>, CodeRule),
    Date(fn(&R) -> Option<NaiveDate>, DateRule),
}

/// One entry of a field rule table
#[derive(Debug, Clone)]
pub struct FieldCheck<R> {
    pub def: CheckDef,
    pub access: FieldAccess<R>,
}

impl<R> FieldCheck<R> {
    /// Evaluate this check on a record
    #[must_use]
    pub fn evaluate(&self, record: &R, ctx: &ScoringContext) -> QualityCode {
        match &self.access {
            FieldAccess::Int(get, rule) => rule.evaluate(get(record)),
            FieldAccess::Code(get, rule) => rule.evaluate(get(record)),
            FieldAccess::Date(get, rule) => rule.evaluate(get(record), ctx),
        }
    }
}

/// Scores the fields of a record against its rule table
pub struct FieldScorer;

impl FieldScorer {
    /// Append one score per table entry to `out`
    pub fn score_into<R>(
        record: &R,
        checks: &[FieldCheck<R>],
        ctx: &ScoringContext,
        out: &mut Vec<CheckScore>,
    ) {
        out.extend(
            checks
                .iter()
                .map(|check| CheckScore::new(check.def, check.evaluate(record, ctx))),
        );
    }

    /// Score the fields of a record
    #[must_use]
    pub fn score<R>(record: &R, checks: &[FieldCheck<R>], ctx: &ScoringContext) -> Vec<CheckScore> {
        let mut out = Vec::with_capacity(checks.len());
        Self::score_into(record, checks, ctx, &mut out);
        out
    }
}
