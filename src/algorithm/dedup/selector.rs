//! Retention policies for duplicate groups
//!
//! A policy looks at the members of one group and decides which of them to
//! keep. The two built-in policies are independent: a record may be kept by
//! either, both or neither.

use crate::algorithm::dedup::grouper::DuplicateGroups;
use crate::models::RetentionFlags;

/// What a policy knows about one member of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMember {
    /// Index of the record in the partition
    pub index: usize,
    /// 1-based position within the group
    pub ith_duplicate: usize,
    /// Number of populated attribute fields
    pub populated_fields: usize,
}

/// Decides which members of a duplicate group are retained
pub trait GroupSelectionPolicy: Send + Sync {
    /// Name of the policy, used in log output
    fn name(&self) -> &'static str;

    /// One keep decision per member, in the order given
    fn select(&self, members: &[GroupMember]) -> Vec<bool>;
}

/// Keeps the first record of each group
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstInGroup;

impl GroupSelectionPolicy for FirstInGroup {
    fn name(&self) -> &'static str {
        "first"
    }

    fn select(&self, members: &[GroupMember]) -> Vec<bool> {
        members.iter().map(|m| m.ith_duplicate == 1).collect()
    }
}

/// Keeps every record whose populated-field count reaches the group maximum.
///
/// Ties are not broken: several records of a group may be kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostCompleteInGroup;

impl GroupSelectionPolicy for MostCompleteInGroup {
    fn name(&self) -> &'static str {
        "most_complete"
    }

    fn select(&self, members: &[GroupMember]) -> Vec<bool> {
        let max = members.iter().map(|m| m.populated_fields).max().unwrap_or(0);
        members.iter().map(|m| m.populated_fields == max).collect()
    }
}

/// Computes retention flags for every record of a partition
pub struct DuplicateSelector;

impl DuplicateSelector {
    /// Apply both built-in policies
    #[must_use]
    pub fn flags(groups: &DuplicateGroups, populated_fields: &[usize]) -> Vec<RetentionFlags> {
        let first = Self::apply(&FirstInGroup, groups, populated_fields);
        let complete = Self::apply(&MostCompleteInGroup, groups, populated_fields);

        first
            .into_iter()
            .zip(complete)
            .map(|(is_first, is_most_complete)| RetentionFlags {
                is_first,
                is_most_complete,
            })
            .collect()
    }

    /// Apply one policy, returning a keep decision per record
    #[must_use]
    pub fn apply(
        policy: &dyn GroupSelectionPolicy,
        groups: &DuplicateGroups,
        populated_fields: &[usize],
    ) -> Vec<bool> {
        let mut keep = vec![false; groups.assignments.len()];

        for group in &groups.groups {
            let members: Vec<GroupMember> = group
                .members
                .iter()
                .map(|&index| GroupMember {
                    index,
                    ith_duplicate: groups.assignments[index].ith_duplicate,
                    populated_fields: populated_fields[index],
                })
                .collect();

            for (member, kept) in members.iter().zip(policy.select(&members)) {
                keep[member.index] = kept;
            }
        }

        log::debug!(
            "Policy '{}' retained {} of {} records",
            policy.name(),
            keep.iter().filter(|&&k| k).count(),
            keep.len()
        );
        keep
    }
}
