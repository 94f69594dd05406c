#[cfg(test)]
mod tests {
    use episode_dq::algorithm::quality::field::maternity::MATERNITY_FIELD_CHECKS;
    use episode_dq::algorithm::quality::{FieldScorer, QualityRules, ScoringContext};
    use episode_dq::{EpisodeRecord, MaternityRecord, QualityCode};

    use crate::utils::{complete_episode, date, live_delivery};

    const CTX: ScoringContext = ScoringContext::new(2015);

    fn code_of(scores: &[episode_dq::CheckScore], name: &str) -> QualityCode {
        scores
            .iter()
            .find(|s| s.check.name == name)
            .map(|s| s.code)
            .unwrap()
    }

    #[test]
    fn test_complete_records_are_valid() {
        let episode = complete_episode("P1", date(2015, 3, 1));
        assert!(episode
            .score_record(&CTX)
            .iter()
            .all(|s| s.code == QualityCode::Valid));

        let delivery = live_delivery("E1", "M1", date(2015, 3, 1));
        let scores = FieldScorer::score(&delivery, MATERNITY_FIELD_CHECKS, &CTX);
        assert_eq!(scores.len(), 11);
        assert!(scores.iter().all(|s| s.code == QualityCode::Valid));
    }

    #[test]
    fn test_missing_and_sentinel_values() {
        let record = EpisodeRecord {
            sex: None,
            ethnos: Some("X".to_string()),
            epiend: date(1800, 1, 1),
            ..complete_episode("P1", date(2015, 3, 1))
        };
        let scores = FieldScorer::score(&record, EpisodeRecord::field_checks(), &CTX);

        assert_eq!(code_of(&scores, "dq_sex"), QualityCode::Missing);
        assert_eq!(code_of(&scores, "dq_ethnos"), QualityCode::Unknown);
        assert_eq!(code_of(&scores, "dq_epiend"), QualityCode::Missing);
        assert_eq!(code_of(&scores, "dq_epistart"), QualityCode::Valid);
    }

    #[test]
    fn test_illegal_and_future_values() {
        let record = EpisodeRecord {
            sex: Some(7),
            diag_01: Some("not a code".to_string()),
            epistart: date(2016, 1, 1),
            dob: date(1850, 1, 1),
            ..complete_episode("P1", date(2015, 3, 1))
        };
        let scores = FieldScorer::score(&record, EpisodeRecord::field_checks(), &CTX);

        assert_eq!(code_of(&scores, "dq_sex"), QualityCode::Illegal);
        assert_eq!(code_of(&scores, "dq_diag_01"), QualityCode::Illegal);
        assert_eq!(code_of(&scores, "dq_epistart"), QualityCode::Infeasible);
        assert_eq!(code_of(&scores, "dq_dob"), QualityCode::Illegal);
    }

    #[test]
    fn test_primary_diagnosis_length() {
        let score_diag = |code: &str| {
            let record = complete_episode("P1", date(2015, 3, 1)).with_diagnoses(&[code]);
            code_of(&record.score_record(&CTX), "dq_diag_01")
        };
        assert_eq!(score_diag("J45.01"), QualityCode::Valid);
        assert_eq!(score_diag("J45.01X"), QualityCode::Illegal);
        assert_eq!(score_diag("R69"), QualityCode::Unknown);
    }

    #[test]
    fn test_maternity_doubtful_values() {
        let record = MaternityRecord {
            matage: Some(52),
            numbaby: Some(4),
            ..live_delivery("E1", "M1", date(2015, 3, 1))
        };
        let scores = FieldScorer::score(&record, MaternityRecord::field_checks(), &CTX);

        assert_eq!(code_of(&scores, "dq_matage"), QualityCode::Doubtful);
        assert_eq!(code_of(&scores, "dq_numbaby"), QualityCode::Doubtful);
    }

    #[test]
    fn test_scores_follow_table_order() {
        let record = live_delivery("E1", "M1", date(2015, 3, 1));
        let scores = record.score_record(&CTX);
        let names: Vec<&str> = scores.iter().map(|s| s.check.name).collect();
        let expected: Vec<&str> = MaternityRecord::check_defs()
            .iter()
            .take(scores.len())
            .map(|d| d.name)
            .collect();
        assert_eq!(names, expected);
    }
}
