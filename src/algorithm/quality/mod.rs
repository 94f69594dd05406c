//! Quality scoring of individual records
//!
//! Each record variant carries three check tables: single fields, field
//! combinations within the record, and relationships to the entity's previous
//! record. The tables are plain statics so a score card always has the same
//! layout for every record of a variant.

pub mod aggregate;
pub mod field;
pub mod inter;
pub mod intra;
pub mod weights;

pub use aggregate::{ScoreAggregator, Totals};
pub use field::{FieldCheck, FieldScorer};
pub use inter::{InterCheck, InterContext, InterOutcome, InterRecordScorer};
pub use intra::{BirthWeightPlausibilityScorer, IntraCheck, IntraRecordScorer};
pub use weights::WeightDeriver;

use crate::models::{CheckDef, CheckScore, DqRecord, EpisodeRecord, MaternityRecord};

/// Values every field rule may depend on besides the field itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Data-collection year of the partition being scored
    pub reference_year: i32,
}

impl ScoringContext {
    #[must_use]
    pub const fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }
}

/// Check tables of a record variant
pub trait QualityRules: DqRecord + Sized + 'static {
    fn field_checks() -> &'static [FieldCheck<Self>];

    fn intra_checks() -> &'static [IntraCheck<Self>];

    fn inter_checks() -> &'static [InterCheck<Self>];

    /// Number of checks on a full score card
    #[must_use]
    fn check_count() -> usize {
        Self::field_checks().len() + Self::intra_checks().len() + Self::inter_checks().len()
    }

    /// Checks in score card order: field, intra, inter
    #[must_use]
    fn check_defs() -> Vec<CheckDef> {
        Self::field_checks()
            .iter()
            .map(|c| c.def)
            .chain(Self::intra_checks().iter().map(|c| c.def))
            .chain(Self::inter_checks().iter().map(|c| c.def))
            .collect()
    }

    /// Field and intra-record scores of one record
    #[must_use]
    fn score_record(&self, ctx: &ScoringContext) -> Vec<CheckScore> {
        let mut scores = Vec::with_capacity(Self::check_count());
        FieldScorer::score_into(self, Self::field_checks(), ctx, &mut scores);
        IntraRecordScorer::score_into(self, Self::intra_checks(), &mut scores);
        scores
    }
}

impl QualityRules for EpisodeRecord {
    fn field_checks() -> &'static [FieldCheck<Self>] {
        field::episode::EPISODE_FIELD_CHECKS
    }

    fn intra_checks() -> &'static [IntraCheck<Self>] {
        intra::episode::EPISODE_INTRA_CHECKS
    }

    fn inter_checks() -> &'static [InterCheck<Self>] {
        inter::episode::EPISODE_INTER_CHECKS
    }
}

impl QualityRules for MaternityRecord {
    fn field_checks() -> &'static [FieldCheck<Self>] {
        field::maternity::MATERNITY_FIELD_CHECKS
    }

    fn intra_checks() -> &'static [IntraCheck<Self>] {
        intra::maternity::MATERNITY_INTRA_CHECKS
    }

    fn inter_checks() -> &'static [InterCheck<Self>] {
        inter::maternity::MATERNITY_INTER_CHECKS
    }
}
