//! End-to-end scoring of partitioned records
//!
//! Each partition (data-collection year) is scored independently:
//!
//! 1. duplicate grouping and retention flags
//! 2. field and intra-record checks, per record in parallel
//! 3. inter-record checks, per entity chain in parallel
//! 4. weight derivation over the whole partition
//! 5. per-record totals
//!
//! Step 4 needs every score card of the partition, so no total is produced
//! before all checks have run.

pub mod statistics;

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::time::Instant;

use indicatif::{MultiProgress, ParallelProgressIterator, ProgressIterator};
use itertools::izip;
use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::algorithm::dedup::{DuplicateGrouper, DuplicateSelector};
use crate::algorithm::quality::{
    InterRecordScorer, QualityRules, ScoreAggregator, ScoringContext, WeightDeriver,
};
use crate::config::PipelineConfig;
use crate::error::{DqError, Result};
use crate::models::{CheckScore, ScoredPartition, ScoredRecord};
use crate::utils::logging::{create_multi_progress, create_record_progress_bar, log_condition};

pub use statistics::{PartitionSummary, generate_summary};

/// Result of scoring several partitions
#[derive(Debug)]
pub struct PipelineOutput<R> {
    /// Scored partitions by partition key
    pub scored: BTreeMap<i32, ScoredPartition<R>>,
    /// Data conditions met along the way, such as empty partitions
    pub conditions: Vec<DqError>,
}

impl<R> PipelineOutput<R> {
    /// Summaries of every scored partition, in partition order
    #[must_use]
    pub fn summaries(&self) -> Vec<PartitionSummary> {
        self.scored.values().map(PartitionSummary::from_partition).collect()
    }
}

/// Scores partitions of one record variant
pub struct QualityPipeline<R> {
    config: PipelineConfig,
    pool: Option<ThreadPool>,
    _variant: PhantomData<fn() -> R>,
}

impl<R: QualityRules> QualityPipeline<R> {
    /// Create a pipeline, building a dedicated worker pool if configured
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let pool = match config.num_threads {
            Some(threads) => Some(ThreadPoolBuilder::new().num_threads(threads).build()?),
            None => None,
        };
        debug!(
            "Created {} pipeline with {} worker threads",
            R::VARIANT,
            config.effective_threads()
        );
        Ok(Self {
            config,
            pool,
            _variant: PhantomData,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Score every partition.
    ///
    /// Data conditions such as an empty partition are logged and collected;
    /// the remaining partitions are still scored. Any other error aborts.
    pub fn run(&self, partitions: BTreeMap<i32, Vec<R>>) -> Result<PipelineOutput<R>> {
        let start = Instant::now();
        let (mp, pb) = create_multi_progress(partitions.len() as u64, self.config.show_progress);
        let mut scored = BTreeMap::new();
        let mut conditions = Vec::new();

        for (partition, records) in partitions {
            pb.set_message(partition.to_string());
            match self.score_with_progress(partition, records, Some(&mp)) {
                Ok(result) => {
                    scored.insert(partition, result);
                }
                Err(err) if err.is_data_condition() => {
                    log_condition(&err);
                    conditions.push(err);
                }
                Err(err) => return Err(err),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            "Scored {} {} partitions in {:?} ({} data conditions)",
            scored.len(),
            R::VARIANT,
            start.elapsed(),
            conditions.len()
        );
        Ok(PipelineOutput { scored, conditions })
    }

    /// Score the records of one partition
    pub fn score_partition(&self, partition: i32, records: Vec<R>) -> Result<ScoredPartition<R>> {
        self.score_with_progress(partition, records, None)
    }

    /// Score one partition, stacking its record bar below `progress` if given
    fn score_with_progress(
        &self,
        partition: i32,
        records: Vec<R>,
        progress: Option<&MultiProgress>,
    ) -> Result<ScoredPartition<R>> {
        match &self.pool {
            Some(pool) => pool.install(|| self.score_in_current_pool(partition, records, progress)),
            None => self.score_in_current_pool(partition, records, progress),
        }
    }

    fn score_in_current_pool(
        &self,
        partition: i32,
        records: Vec<R>,
        progress: Option<&MultiProgress>,
    ) -> Result<ScoredPartition<R>> {
        if records.is_empty() {
            return Err(DqError::EmptyPartition { partition });
        }

        let start = Instant::now();
        let parallel = records.len() >= self.config.min_parallel_records;
        let ctx = ScoringContext::new(partition);
        info!(
            "Scoring {} {} records for partition {}",
            records.len(),
            R::VARIANT,
            partition
        );

        let groups = DuplicateGrouper::group(&records);
        let populated: Vec<usize> = records.iter().map(R::populated_field_count).collect();
        let retention = DuplicateSelector::flags(&groups, &populated);

        let pb = create_record_progress_bar(
            records.len() as u64,
            &format!("{} {partition}", R::VARIANT),
            self.config.show_progress,
        );
        let pb = match progress {
            Some(mp) => mp.add(pb),
            None => pb,
        };
        let mut cards: Vec<Vec<CheckScore>> = if parallel {
            records
                .par_iter()
                .progress_with(pb.clone())
                .map(|record| record.score_record(&ctx))
                .collect()
        } else {
            records
                .iter()
                .progress_with(pb.clone())
                .map(|record| record.score_record(&ctx))
                .collect()
        };
        pb.finish_and_clear();

        let inter = InterRecordScorer::score_partition(
            &records,
            &groups.assignments,
            R::inter_checks(),
            parallel,
        );
        let mut intervals = Vec::with_capacity(records.len());
        for (card, outcome) in cards.iter_mut().zip(inter) {
            card.extend(outcome.scores);
            intervals.push(outcome.interval_weeks);
        }

        let weights = WeightDeriver::derive(partition, &cards)?;
        let duplicate_groups = groups.duplicate_group_count();

        let scored = izip!(records, cards, groups.assignments, retention, populated, intervals)
            .map(|(record, scores, group, retention, populated_fields, interval_weeks)| {
                let totals = ScoreAggregator::aggregate(&scores, &weights)?;
                Ok::<_, DqError>(ScoredRecord {
                    record,
                    group,
                    retention,
                    populated_fields,
                    interval_weeks,
                    scores,
                    unadjusted_total: totals.unadjusted,
                    adjusted_total: totals.adjusted,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Partition {} scored in {:?} ({} duplicate groups)",
            partition,
            start.elapsed(),
            duplicate_groups
        );

        Ok(ScoredPartition {
            partition,
            records: scored,
            weights,
        })
    }
}
