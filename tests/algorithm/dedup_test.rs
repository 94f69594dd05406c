#[cfg(test)]
mod tests {
    use episode_dq::EpisodeRecord;
    use episode_dq::algorithm::dedup::{
        DuplicateGrouper, DuplicateSelector, FirstInGroup, GroupSelectionPolicy,
        MostCompleteInGroup,
    };
    use episode_dq::models::DqRecord;

    use crate::utils::date;

    /// Four copies of one episode with 9, 7, 8 and 9 populated fields
    fn four_copies() -> Vec<EpisodeRecord> {
        let base = EpisodeRecord::new("P1", date(1980, 5, 1), date(2015, 3, 1), date(2015, 3, 4))
            .with_sex(2)
            .with_ethnos("A");
        vec![
            base.clone().with_diagnoses(&["O80", "Z37", "O70"]),
            base.clone().with_diagnoses(&["O80"]),
            base.clone().with_diagnoses(&["O80", "Z37"]),
            base.with_diagnoses(&["O80", "Z37", "O99"]),
        ]
    }

    #[test]
    fn test_populated_counts() {
        let counts: Vec<usize> = four_copies()
            .iter()
            .map(DqRecord::populated_field_count)
            .collect();
        assert_eq!(counts, vec![9, 7, 8, 9]);
    }

    #[test]
    fn test_group_of_four() {
        let records = four_copies();
        let groups = DuplicateGrouper::group(&records);

        assert_eq!(groups.groups.len(), 1);
        for (i, assignment) in groups.assignments.iter().enumerate() {
            assert_eq!(assignment.group_id, 1);
            assert_eq!(assignment.group_size, 4);
            assert_eq!(assignment.ith_duplicate, i + 1);
        }
        assert_eq!(groups.duplicate_group_count(), 1);
        assert_eq!(groups.records_in_duplicate_groups(), 4);
    }

    #[test]
    fn test_retention_policies() {
        let records = four_copies();
        let groups = DuplicateGrouper::group(&records);
        let populated: Vec<usize> = records.iter().map(DqRecord::populated_field_count).collect();

        let first = DuplicateSelector::apply(&FirstInGroup, &groups, &populated);
        assert_eq!(first, vec![true, false, false, false]);

        // Ties at the maximum are all kept
        let complete = DuplicateSelector::apply(&MostCompleteInGroup, &groups, &populated);
        assert_eq!(complete, vec![true, false, false, true]);

        let flags = DuplicateSelector::flags(&groups, &populated);
        assert!(flags[0].is_first && flags[0].is_most_complete);
        assert!(!flags[3].is_first && flags[3].is_most_complete);
        assert_eq!(MostCompleteInGroup.name(), "most_complete");
    }

    #[test]
    fn test_singletons_are_kept_by_both_policies() {
        let records = vec![
            EpisodeRecord::new("P1", None, date(2015, 1, 1), None),
            EpisodeRecord::new("P2", None, date(2015, 1, 1), None),
        ];
        let groups = DuplicateGrouper::group(&records);
        let populated: Vec<usize> = records.iter().map(DqRecord::populated_field_count).collect();

        for flags in DuplicateSelector::flags(&groups, &populated) {
            assert!(flags.is_first);
            assert!(flags.is_most_complete);
        }
        assert_eq!(groups.duplicate_group_count(), 0);
    }

    #[test]
    fn test_group_ids_rank_with_gaps() {
        let records = vec![
            EpisodeRecord::new("P2", None, date(2015, 1, 1), None),
            EpisodeRecord::new("P1", None, date(2015, 1, 1), None),
            EpisodeRecord::new("P1", None, date(2015, 1, 1), None),
        ];
        let groups = DuplicateGrouper::group(&records);
        let ids: Vec<usize> = groups.assignments.iter().map(|a| a.group_id).collect();
        assert_eq!(ids, vec![3, 1, 1]);
    }
}
