//! Duplicate grouping over natural keys
//!
//! Records are sorted by natural key with a stable sort, so records sharing a
//! key keep their input order inside the group. The group id is the rank of
//! the key with gaps: the 1-based sorted position of the group's first member.

use itertools::Itertools;
use log::debug;
use smallvec::SmallVec;

use crate::models::{DqRecord, GroupAssignment};

/// Members of one duplicate group, by record index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub group_id: usize,
    /// Record indices in `ith_duplicate` order
    pub members: SmallVec<[usize; 4]>,
}

impl DuplicateGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.members.len() > 1
    }
}

/// Result of grouping one partition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateGroups {
    /// Assignment per record, aligned with the input
    pub assignments: Vec<GroupAssignment>,
    /// Groups in key order
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateGroups {
    /// Number of groups holding more than one record
    #[must_use]
    pub fn duplicate_group_count(&self) -> usize {
        self.groups.iter().filter(|g| g.has_duplicates()).count()
    }

    /// Number of records belonging to a group with more than one record
    #[must_use]
    pub fn records_in_duplicate_groups(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.has_duplicates())
            .map(DuplicateGroup::len)
            .sum()
    }
}

/// Assigns duplicate groups to records sharing a natural key
pub struct DuplicateGrouper;

impl DuplicateGrouper {
    /// Group records by their natural key
    #[must_use]
    pub fn group<R: DqRecord>(records: &[R]) -> DuplicateGroups {
        let keys: Vec<R::Key> = records.iter().map(DqRecord::natural_key).collect();
        let groups = Self::group_keys(&keys);
        debug!(
            "Grouped {} {} records into {} groups ({} with duplicates)",
            records.len(),
            R::VARIANT,
            groups.groups.len(),
            groups.duplicate_group_count()
        );
        groups
    }

    /// Group precomputed keys
    #[must_use]
    pub fn group_keys<K: Ord>(keys: &[K]) -> DuplicateGroups {
        let mut order: Vec<usize> = (0..keys.len()).collect();
        // Stable, so ties keep input order
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

        let mut assignments = vec![
            GroupAssignment {
                group_id: 0,
                ith_duplicate: 0,
                group_size: 0,
            };
            keys.len()
        ];
        let mut groups = Vec::new();
        let mut position = 0;

        for (_, chunk) in &order.iter().chunk_by(|&&idx| &keys[idx]) {
            let members: SmallVec<[usize; 4]> = chunk.copied().collect();
            let group_id = position + 1;
            let group_size = members.len();

            for (rank, &idx) in members.iter().enumerate() {
                assignments[idx] = GroupAssignment {
                    group_id,
                    ith_duplicate: rank + 1,
                    group_size,
                };
            }

            position += group_size;
            groups.push(DuplicateGroup { group_id, members });
        }

        DuplicateGroups {
            assignments,
            groups,
        }
    }
}
