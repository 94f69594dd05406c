//! Checks between a record and its entity's preceding record
//!
//! Records are chained per entity in occurrence order. Each chain is handled
//! by one worker, so an entity's chronological sequence is never split. A
//! record without an entity identifier forms a chain of its own and therefore
//! has no predecessor.

pub mod episode;
pub mod maternity;

use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::models::{CheckDef, CheckScore, DqRecord, GroupAssignment, QualityCode};

/// What an inter-record check may look at besides the record itself
#[derive(Debug, Clone, Copy)]
pub struct InterContext<'a, R> {
    /// The entity's immediately preceding record
    pub previous: Option<&'a R>,
    /// Whole weeks between the previous and the current occurrence
    pub interval_weeks: Option<i64>,
    /// Duplicate group membership of the current record
    pub group: GroupAssignment,
}

/// One entry of an inter-record check table
#[derive(Debug, Clone, Copy)]
pub struct InterCheck<R> {
    pub def: CheckDef,
    pub eval: fn(&R, &InterContext<'_, R>) -> QualityCode,
}

/// Inter-record result for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterOutcome {
    pub interval_weeks: Option<i64>,
    pub scores: Vec<CheckScore>,
}

/// A record sharing its natural key with another record is a duplicate
pub fn is_duplicate<R>(_record: &R, ctx: &InterContext<'_, R>) -> QualityCode {
    if ctx.group.has_duplicates() {
        QualityCode::Illegal
    } else {
        QualityCode::Valid
    }
}

/// Whole weeks from `previous` to `current`, truncated
#[must_use]
pub fn interval_weeks(previous: NaiveDate, current: NaiveDate) -> i64 {
    (current - previous).num_days() / 7
}

/// Scores records against their entity's preceding record
pub struct InterRecordScorer;

impl InterRecordScorer {
    /// Chain record indices per entity in occurrence order.
    ///
    /// Ties on the occurrence date fall back to the natural key, then to
    /// input position, so the order is total and reproducible.
    #[must_use]
    pub fn chains<R: DqRecord>(records: &[R]) -> Vec<SmallVec<[usize; 4]>> {
        let mut by_entity: FxHashMap<&str, SmallVec<[usize; 4]>> = FxHashMap::default();
        let mut chains = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            match record.entity_id() {
                Some(entity) => by_entity.entry(entity).or_default().push(idx),
                None => chains.push(SmallVec::from_slice(&[idx])),
            }
        }

        chains.extend(by_entity.into_values());
        for chain in &mut chains {
            chain.sort_by_cached_key(|&idx| {
                let record = &records[idx];
                (record.occurrence_date(), record.natural_key(), idx)
            });
        }
        // Hash map order is arbitrary; fix it for reproducible logs
        chains.sort_unstable_by_key(|chain| chain[0]);

        debug!(
            "Sequenced {} {} records into {} entity chains",
            records.len(),
            R::VARIANT,
            chains.len()
        );
        chains
    }

    /// Score every record of a partition, aligned with the input
    #[must_use]
    pub fn score_partition<R: DqRecord>(
        records: &[R],
        groups: &[GroupAssignment],
        checks: &[InterCheck<R>],
        parallel: bool,
    ) -> Vec<InterOutcome> {
        let chains = Self::chains(records);

        let score_chain = |chain: &SmallVec<[usize; 4]>| -> Vec<(usize, InterOutcome)> {
            chain
                .iter()
                .enumerate()
                .map(|(pos, &idx)| {
                    let previous = pos.checked_sub(1).map(|p| &records[chain[p]]);
                    (idx, Self::score_record(&records[idx], previous, groups[idx], checks))
                })
                .collect()
        };

        let mut outcomes: Vec<(usize, InterOutcome)> = if parallel {
            chains.par_iter().flat_map_iter(score_chain).collect()
        } else {
            chains.iter().flat_map(score_chain).collect()
        };

        outcomes.sort_unstable_by_key(|(idx, _)| *idx);
        outcomes.into_iter().map(|(_, outcome)| outcome).collect()
    }

    /// Score one record given its predecessor
    #[must_use]
    pub fn score_record<R: DqRecord>(
        record: &R,
        previous: Option<&R>,
        group: GroupAssignment,
        checks: &[InterCheck<R>],
    ) -> InterOutcome {
        let interval = previous.and_then(|prev| {
            Some(interval_weeks(prev.occurrence_date()?, record.occurrence_date()?))
        });
        let ctx = InterContext {
            previous,
            interval_weeks: interval,
            group,
        };

        InterOutcome {
            interval_weeks: interval,
            scores: checks
                .iter()
                .map(|check| CheckScore::new(check.def, (check.eval)(record, &ctx)))
                .collect(),
        }
    }
}
