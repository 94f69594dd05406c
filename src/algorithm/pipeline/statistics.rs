//! Partition statistics and summaries

use rustc_hash::FxHashSet;

use crate::models::ScoredPartition;

/// Deduplication and scoring statistics of one partition
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionSummary {
    /// Partition key
    pub partition: i32,
    /// Number of records scored
    pub record_count: usize,
    /// Number of distinct duplicate groups
    pub group_count: usize,
    /// Number of groups holding more than one record
    pub duplicate_group_count: usize,
    /// Number of records belonging to such groups
    pub records_in_duplicate_groups: usize,
    /// Records flagged as first in their group
    pub first_in_group: usize,
    /// Records flagged as most complete in their group
    pub most_complete_in_group: usize,
    /// Mean unadjusted total
    pub mean_unadjusted: f64,
    /// Mean weight-adjusted total
    pub mean_adjusted: f64,
}

impl PartitionSummary {
    /// Summarise a scored partition
    #[must_use]
    pub fn from_partition<R>(partition: &ScoredPartition<R>) -> Self {
        let record_count = partition.len();

        let groups: FxHashSet<usize> = partition.records.iter().map(|r| r.group.group_id).collect();
        let duplicate_groups: FxHashSet<usize> = partition
            .records
            .iter()
            .filter(|r| r.group.has_duplicates())
            .map(|r| r.group.group_id)
            .collect();
        let records_in_duplicate_groups = partition
            .records
            .iter()
            .filter(|r| r.group.has_duplicates())
            .count();

        let (mean_unadjusted, mean_adjusted) = if record_count > 0 {
            let unadjusted: u64 = partition
                .records
                .iter()
                .map(|r| u64::from(r.unadjusted_total))
                .sum();
            let adjusted: f64 = partition.records.iter().map(|r| r.adjusted_total).sum();
            (
                unadjusted as f64 / record_count as f64,
                adjusted / record_count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            partition: partition.partition,
            record_count,
            group_count: groups.len(),
            duplicate_group_count: duplicate_groups.len(),
            records_in_duplicate_groups,
            first_in_group: partition.first_in_group().count(),
            most_complete_in_group: partition.most_complete_in_group().count(),
            mean_unadjusted,
            mean_adjusted,
        }
    }
}

/// Human-readable report over several partitions
#[must_use]
pub fn generate_summary(variant: &str, summaries: &[PartitionSummary]) -> String {
    let mut summary = String::new();
    summary.push_str(&format!("Data Quality Summary ({variant}):\n"));

    if summaries.is_empty() {
        summary.push_str("  No partitions scored\n");
        return summary;
    }

    for stats in summaries {
        let duplicate_share = if stats.record_count > 0 {
            stats.records_in_duplicate_groups as f64 / stats.record_count as f64 * 100.0
        } else {
            0.0
        };

        summary.push_str(&format!("\nPartition {}:\n", stats.partition));
        summary.push_str(&format!("  Records: {}\n", stats.record_count));
        summary.push_str(&format!("  Distinct Groups: {}\n", stats.group_count));
        summary.push_str(&format!(
            "  Duplicate Groups: {} ({} records, {duplicate_share:.1}%)\n",
            stats.duplicate_group_count, stats.records_in_duplicate_groups
        ));
        summary.push_str(&format!("  First in Group: {}\n", stats.first_in_group));
        summary.push_str(&format!(
            "  Most Complete in Group: {}\n",
            stats.most_complete_in_group
        ));
        summary.push_str(&format!(
            "  Mean Unadjusted Total: {:.2}\n",
            stats.mean_unadjusted
        ));
        summary.push_str(&format!("  Mean Adjusted Total: {:.2}\n", stats.mean_adjusted));
    }

    let total: usize = summaries.iter().map(|s| s.record_count).sum();
    summary.push_str(&format!(
        "\nTotal: {total} records in {} partitions\n",
        summaries.len()
    ));
    summary
}
