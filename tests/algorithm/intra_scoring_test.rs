#[cfg(test)]
mod tests {
    use episode_dq::algorithm::quality::intra::maternity::MATERNITY_INTRA_CHECKS;
    use episode_dq::algorithm::quality::{
        BirthWeightPlausibilityScorer, IntraRecordScorer, QualityRules,
    };
    use episode_dq::{MaternityRecord, QualityCode};

    use crate::utils::{date, live_delivery};

    fn code_of(record: &MaternityRecord, name: &str) -> QualityCode {
        IntraRecordScorer::score(record, MaternityRecord::intra_checks())
            .into_iter()
            .find(|s| s.check.name == name)
            .map(|s| s.code)
            .unwrap()
    }

    #[test]
    fn test_light_male_at_24_weeks() {
        let record = live_delivery("E1", "M1", date(2015, 3, 1))
            .with_baby(1, Some(1), Some(300), Some(24), Some(1), Some("0"));
        assert_eq!(code_of(&record, "dq_intra_bw_plausibility_1"), QualityCode::Infeasible);
        assert_eq!(
            BirthWeightPlausibilityScorer::score(Some(1), Some(24), Some(1), Some(300)),
            QualityCode::Infeasible
        );
    }

    #[test]
    fn test_stillbirth_ignores_weight() {
        let record = live_delivery("E1", "M1", date(2015, 3, 1))
            .with_baby(1, Some(2), Some(300), Some(24), Some(1), Some("0"));
        assert_eq!(code_of(&record, "dq_intra_bw_plausibility_1"), QualityCode::Valid);
    }

    #[test]
    fn test_twins_tail() {
        let twins = MaternityRecord {
            numbaby: Some(2),
            ..live_delivery("E1", "M1", date(2015, 3, 1))
        }
        .with_baby(2, Some(1), Some(2900), Some(38), Some(2), Some("2"));

        let scores = IntraRecordScorer::score(&twins, MATERNITY_INTRA_CHECKS);
        assert!(scores.iter().all(|s| s.code == QualityCode::Valid));

        // Third baby where only two were delivered
        let extra = twins.with_baby(3, None, Some(2000), None, None, None);
        assert_eq!(code_of(&extra, "dq_intra_birweit_3"), QualityCode::Illegal);
        assert_eq!(code_of(&extra, "dq_intra_birstat_3"), QualityCode::Valid);
    }

    #[test]
    fn test_missing_expected_baby() {
        let record = MaternityRecord {
            numbaby: Some(3),
            ..live_delivery("E1", "M1", date(2015, 3, 1))
        };
        assert_eq!(code_of(&record, "dq_intra_birstat_2"), QualityCode::Missing);
        assert_eq!(code_of(&record, "dq_intra_sexbaby_3"), QualityCode::Missing);
        assert_eq!(code_of(&record, "dq_intra_bw_plausibility_3"), QualityCode::Missing);
    }

    #[test]
    fn test_implausible_numbaby_expects_one() {
        let record = MaternityRecord {
            numbaby: Some(9),
            ..live_delivery("E1", "M1", date(2015, 3, 1))
        };
        assert_eq!(record.expected_babies(), 1);
        assert_eq!(code_of(&record, "dq_intra_birstat_2"), QualityCode::Valid);
    }
}
