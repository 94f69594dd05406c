//! Output of the scoring pipeline
//!
//! A `ScoredRecord` keeps the input record together with everything derived
//! for it: duplicate group membership, retention flags, per-check codes and
//! the two totals. Check weights are shared by all records of a partition.

use crate::models::quality::{CheckDef, CheckScore, QualityCode};

/// Position of a record within its duplicate group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupAssignment {
    /// Rank of the natural key among all keys of the partition (with gaps)
    pub group_id: usize,
    /// 1-based position of the record within its group
    pub ith_duplicate: usize,
    /// Number of records sharing the natural key
    pub group_size: usize,
}

impl GroupAssignment {
    /// Whether the group holds more than one record
    #[must_use]
    pub const fn has_duplicates(&self) -> bool {
        self.group_size > 1
    }
}

/// Retention decisions for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RetentionFlags {
    /// First record of its group under the stable intra-group ordering
    pub is_first: bool,
    /// Populated-field count equals the group maximum
    pub is_most_complete: bool,
}

/// Weight derived for one check in one partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckWeight {
    pub check: CheckDef,
    /// Partition mean of the rescaled value divided by the category maximum
    pub weight: f64,
    /// Number of records the mean was taken over
    pub contributing: usize,
}

/// All check weights of one partition, in score card order
#[derive(Debug, Clone, PartialEq)]
pub struct CheckWeights {
    pub partition: i32,
    pub weights: Vec<CheckWeight>,
}

impl CheckWeights {
    /// Weight of the named check
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.check.name == name)
            .map(|w| w.weight)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// A record with every quality code, flag and total derived for it
#[derive(Debug, Clone)]
pub struct ScoredRecord<R> {
    pub record: R,
    pub group: GroupAssignment,
    pub retention: RetentionFlags,
    /// Number of populated attribute fields
    pub populated_fields: usize,
    /// Whole weeks since the entity's previous occurrence, if any
    pub interval_weeks: Option<i64>,
    /// Field, intra and inter checks, in that order
    pub scores: Vec<CheckScore>,
    /// Sum of the rescaled check values
    pub unadjusted_total: u32,
    /// Sum of the rescaled check values multiplied by their partition weights
    pub adjusted_total: f64,
}

impl<R> ScoredRecord<R> {
    /// Raw code of the named check
    #[must_use]
    pub fn code(&self, name: &str) -> Option<QualityCode> {
        self.scores
            .iter()
            .find(|s| s.check.name == name)
            .map(|s| s.code)
    }
}

/// Scored records of one partition together with its weights
#[derive(Debug, Clone)]
pub struct ScoredPartition<R> {
    pub partition: i32,
    pub records: Vec<ScoredRecord<R>>,
    pub weights: CheckWeights,
}

impl<R> ScoredPartition<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records flagged as first in their group
    pub fn first_in_group(&self) -> impl Iterator<Item = &ScoredRecord<R>> {
        self.records.iter().filter(|r| r.retention.is_first)
    }

    /// Records flagged as most complete in their group
    pub fn most_complete_in_group(&self) -> impl Iterator<Item = &ScoredRecord<R>> {
        self.records.iter().filter(|r| r.retention.is_most_complete)
    }
}
