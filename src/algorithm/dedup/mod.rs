//! Deduplication of records sharing a natural key
//!
//! Grouping assigns every record to exactly one group and ranks it within the
//! group; selection decides which group members are retained.

pub mod grouper;
pub mod selector;

pub use grouper::{DuplicateGroup, DuplicateGrouper, DuplicateGroups};
pub use selector::{
    DuplicateSelector, FirstInGroup, GroupMember, GroupSelectionPolicy, MostCompleteInGroup,
};
