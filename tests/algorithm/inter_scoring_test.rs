#[cfg(test)]
mod tests {
    use episode_dq::algorithm::dedup::DuplicateGrouper;
    use episode_dq::algorithm::quality::{InterRecordScorer, QualityRules};
    use episode_dq::{MaternityRecord, QualityCode};

    use crate::utils::{date, live_delivery};

    fn interval_code(outcome: &episode_dq::algorithm::quality::InterOutcome) -> QualityCode {
        outcome
            .scores
            .iter()
            .find(|s| s.check.name == "dq_inter_interval")
            .map(|s| s.code)
            .unwrap()
    }

    fn score(records: &[MaternityRecord], parallel: bool) -> Vec<episode_dq::algorithm::quality::InterOutcome> {
        let groups = DuplicateGrouper::group(records);
        InterRecordScorer::score_partition(
            records,
            &groups.assignments,
            MaternityRecord::inter_checks(),
            parallel,
        )
    }

    #[test]
    fn test_two_weeks_between_live_births() {
        let records = vec![
            live_delivery("E2", "M1", date(2015, 3, 15)),
            live_delivery("E1", "M1", date(2015, 3, 1)),
        ];
        let outcomes = score(&records, false);

        // The later admission is the one with a predecessor
        assert_eq!(outcomes[0].interval_weeks, Some(2));
        assert_eq!(interval_code(&outcomes[0]), QualityCode::Infeasible);
        assert_eq!(outcomes[1].interval_weeks, None);
        assert_eq!(interval_code(&outcomes[1]), QualityCode::Valid);
    }

    #[test]
    fn test_doubtful_interval() {
        let records = vec![
            live_delivery("E1", "M1", date(2015, 1, 1)),
            live_delivery("E2", "M1", date(2015, 6, 18)),
        ];
        let outcomes = score(&records, false);
        assert_eq!(outcomes[1].interval_weeks, Some(24));
        assert_eq!(interval_code(&outcomes[1]), QualityCode::Doubtful);
    }

    #[test]
    fn test_sentinel_admissions_have_no_interval() {
        for sentinel in [date(1800, 1, 1), date(1801, 1, 1)] {
            let records = vec![
                live_delivery("E1", "M1", sentinel),
                live_delivery("E2", "M1", sentinel),
            ];
            for outcome in score(&records, false) {
                assert_eq!(outcome.interval_weeks, None);
                assert_eq!(interval_code(&outcome), QualityCode::Valid);
            }
        }

        // A sentinel predecessor does not pair with a real admission either
        let records = vec![
            live_delivery("E1", "M1", date(1800, 1, 1)),
            live_delivery("E2", "M1", date(2015, 3, 1)),
        ];
        let outcomes = score(&records, false);
        assert_eq!(outcomes[1].interval_weeks, None);
        assert_eq!(interval_code(&outcomes[1]), QualityCode::Valid);
    }

    #[test]
    fn test_entities_do_not_mix() {
        let records = vec![
            live_delivery("E1", "M1", date(2015, 3, 1)),
            live_delivery("E2", "M2", date(2015, 3, 8)),
        ];
        for outcome in score(&records, false) {
            assert_eq!(outcome.interval_weeks, None);
            assert_eq!(interval_code(&outcome), QualityCode::Valid);
        }
    }

    #[test]
    fn test_missing_mother_has_no_predecessor() {
        let mut orphan = live_delivery("E2", "M1", date(2015, 3, 8));
        orphan.patient_id = None;
        let records = vec![live_delivery("E1", "M1", date(2015, 3, 1)), orphan];
        let outcomes = score(&records, false);
        assert_eq!(outcomes[1].interval_weeks, None);
    }

    #[test]
    fn test_singleton_and_duplicate_flags() {
        let records = vec![
            live_delivery("E1", "M1", date(2015, 3, 1)),
            live_delivery("E1", "M1", date(2015, 3, 1)),
            live_delivery("E3", "M3", date(2015, 4, 1)),
        ];
        let outcomes = score(&records, false);
        let duplicate = |i: usize| {
            outcomes[i]
                .scores
                .iter()
                .find(|s| s.check.name == "dq_inter_is_duplicate")
                .map(|s| s.code)
                .unwrap()
        };
        assert_eq!(duplicate(0), QualityCode::Illegal);
        assert_eq!(duplicate(1), QualityCode::Illegal);
        assert_eq!(duplicate(2), QualityCode::Valid);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<MaternityRecord> = (0..200)
            .map(|i| {
                let mother = format!("M{}", i % 17);
                let admitted = date(2015, 1, 1)
                    .and_then(|d| d.checked_add_days(chrono::Days::new((i * 11) % 360)));
                live_delivery(&format!("E{i}"), &mother, admitted)
            })
            .collect();
        assert_eq!(score(&records, true), score(&records, false));
    }
}
