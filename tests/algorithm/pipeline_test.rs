#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use episode_dq::algorithm::pipeline::generate_summary;
    use episode_dq::{
        DqError, EpisodeRecord, MaternityRecord, PartitionSummary, PipelineConfig, QualityCode,
        QualityPipeline, QualityRules,
    };

    use crate::utils::{complete_episode, date, live_delivery};

    fn episode_partition() -> Vec<EpisodeRecord> {
        let base = EpisodeRecord::new("P1", date(1980, 5, 1), date(2015, 3, 1), date(2015, 3, 4))
            .with_sex(2)
            .with_ethnos("A");
        vec![
            base.clone().with_diagnoses(&["O80", "Z37", "O70"]),
            base.clone().with_diagnoses(&["O80"]),
            base.clone().with_diagnoses(&["O80", "Z37"]),
            base.with_diagnoses(&["O80", "Z37", "O99"]),
            complete_episode("P2", date(2015, 5, 1)),
            complete_episode("P3", date(2015, 7, 1)),
        ]
    }

    fn sequential() -> PipelineConfig {
        PipelineConfig::new().with_min_parallel_records(usize::MAX)
    }

    #[test]
    fn test_episode_partition() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        let scored = pipeline.score_partition(2015, episode_partition()).unwrap();

        assert_eq!(scored.len(), 6);
        assert_eq!(scored.weights.len(), EpisodeRecord::check_count());

        let group: Vec<_> = scored.records[..4].iter().map(|r| r.group).collect();
        assert!(group.iter().all(|g| g.group_size == 4 && g.group_id == 1));
        assert_eq!(
            group.iter().map(|g| g.ith_duplicate).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );

        let first: Vec<bool> = scored.records.iter().map(|r| r.retention.is_first).collect();
        assert_eq!(first, vec![true, false, false, false, true, true]);
        let complete: Vec<bool> = scored
            .records
            .iter()
            .map(|r| r.retention.is_most_complete)
            .collect();
        assert_eq!(complete, vec![true, false, false, true, true, true]);

        for record in &scored.records[..4] {
            assert_eq!(record.code("dq_inter_is_duplicate"), Some(QualityCode::Illegal));
            // Copies of one episode are not overlaps
            assert_eq!(record.code("dq_inter_overlap"), Some(QualityCode::Valid));
        }
        assert_eq!(
            scored.records[4].code("dq_inter_is_duplicate"),
            Some(QualityCode::Valid)
        );
    }

    #[test]
    fn test_weights_and_totals() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        let scored = pipeline.score_partition(2015, episode_partition()).unwrap();

        for weight in &scored.weights.weights {
            assert!((0.0..=1.0).contains(&weight.weight), "{}", weight.check.name);
            assert_eq!(weight.contributing, 6);
        }

        // 4 of 6 records are duplicates: (4 * 100 + 2 * 800) / 6 / 800
        let dup = scored.weights.get("dq_inter_is_duplicate").unwrap();
        assert!((dup - 2000.0 / 4800.0).abs() < 1e-12);

        for record in &scored.records {
            let plain: u32 = record.scores.iter().map(|s| s.scaled()).sum();
            assert_eq!(record.unadjusted_total, plain);
            assert!(record.adjusted_total <= f64::from(record.unadjusted_total) + 1e-9);
        }

        // A valid singleton outscores the copies flagged as duplicates
        assert!(scored.records[4].unadjusted_total > scored.records[0].unadjusted_total);
    }

    #[test]
    fn test_rerun_is_identical() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        let first = pipeline.score_partition(2015, episode_partition()).unwrap();
        let second = pipeline.score_partition(2015, episode_partition()).unwrap();

        assert_eq!(first.weights, second.weights);
        for (a, b) in first.records.iter().zip(&second.records) {
            assert_eq!(a.scores, b.scores);
            assert_eq!(a.group, b.group);
            assert_eq!(a.retention, b.retention);
            assert_eq!(a.unadjusted_total, b.unadjusted_total);
            assert_eq!(a.adjusted_total.to_bits(), b.adjusted_total.to_bits());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<MaternityRecord> = (0..300u64)
            .map(|i| {
                let admitted = date(2015, 1, 1)
                    .and_then(|d| d.checked_add_days(chrono::Days::new((i * 7) % 350)));
                live_delivery(&format!("E{}", i % 250), &format!("M{}", i % 40), admitted)
            })
            .collect();

        let sequential = QualityPipeline::<MaternityRecord>::new(sequential())
            .unwrap()
            .score_partition(2015, records.clone())
            .unwrap();
        let parallel = QualityPipeline::<MaternityRecord>::new(
            PipelineConfig::new().with_threads(4).with_min_parallel_records(1),
        )
        .unwrap()
        .score_partition(2015, records)
        .unwrap();

        assert_eq!(sequential.weights, parallel.weights);
        for (a, b) in sequential.records.iter().zip(&parallel.records) {
            assert_eq!(a.scores, b.scores);
            assert_eq!(a.interval_weeks, b.interval_weeks);
            assert_eq!(a.unadjusted_total, b.unadjusted_total);
        }
    }

    #[test]
    fn test_maternity_interval_in_pipeline() {
        let records = vec![
            live_delivery("E1", "M1", date(2015, 3, 1)),
            live_delivery("E2", "M1", date(2015, 3, 15)),
        ];
        let pipeline = QualityPipeline::<MaternityRecord>::new(sequential()).unwrap();
        let scored = pipeline.score_partition(2015, records).unwrap();

        assert_eq!(scored.records[1].interval_weeks, Some(2));
        assert_eq!(
            scored.records[1].code("dq_inter_interval"),
            Some(QualityCode::Infeasible)
        );
        assert_eq!(scored.records[0].code("dq_inter_interval"), Some(QualityCode::Valid));
    }

    #[test]
    fn test_empty_partition_is_a_condition() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        assert!(matches!(
            pipeline.score_partition(2016, Vec::new()),
            Err(DqError::EmptyPartition { partition: 2016 })
        ));

        let mut partitions = BTreeMap::new();
        partitions.insert(2015, episode_partition());
        partitions.insert(2016, Vec::new());
        let output = pipeline.run(partitions).unwrap();

        assert_eq!(output.scored.keys().copied().collect::<Vec<_>>(), vec![2015]);
        assert_eq!(output.conditions.len(), 1);
        assert!(matches!(
            output.conditions[0],
            DqError::EmptyPartition { partition: 2016 }
        ));
    }

    #[test]
    fn test_partitions_are_independent() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        let mut partitions = BTreeMap::new();
        partitions.insert(2015, episode_partition());
        partitions.insert(2014, vec![complete_episode("P1", date(2014, 3, 1))]);
        let output = pipeline.run(partitions).unwrap();

        let earlier = &output.scored[&2014];
        assert_eq!(earlier.records[0].interval_weeks, None);
        assert_eq!(earlier.records[0].group.group_size, 1);
        // A single record scores at the category maximum on every check
        for weight in &earlier.weights.weights {
            assert!((weight.weight - 1.0).abs() < 1e-12, "{}", weight.check.name);
        }
    }

    #[test]
    fn test_progress_does_not_change_scores() {
        let partitions = || {
            let mut partitions = BTreeMap::new();
            partitions.insert(2014, vec![complete_episode("P1", date(2014, 3, 1))]);
            partitions.insert(2015, episode_partition());
            partitions
        };
        let quiet = QualityPipeline::<EpisodeRecord>::new(sequential())
            .unwrap()
            .run(partitions())
            .unwrap();
        let shown = QualityPipeline::<EpisodeRecord>::new(sequential().with_progress(true))
            .unwrap()
            .run(partitions())
            .unwrap();

        assert_eq!(quiet.summaries(), shown.summaries());
        for (a, b) in quiet.scored[&2015].records.iter().zip(&shown.scored[&2015].records) {
            assert_eq!(a.scores, b.scores);
            assert_eq!(a.unadjusted_total, b.unadjusted_total);
        }
    }

    #[test]
    fn test_summary() {
        let pipeline = QualityPipeline::<EpisodeRecord>::new(sequential()).unwrap();
        let scored = pipeline.score_partition(2015, episode_partition()).unwrap();
        let summary = PartitionSummary::from_partition(&scored);

        assert_eq!(summary.record_count, 6);
        assert_eq!(summary.group_count, 3);
        assert_eq!(summary.duplicate_group_count, 1);
        assert_eq!(summary.records_in_duplicate_groups, 4);
        assert_eq!(summary.first_in_group, 3);
        assert_eq!(summary.most_complete_in_group, 4);

        let report = generate_summary("episode", &[summary]);
        assert!(report.contains("Partition 2015:"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = QualityPipeline::<EpisodeRecord>::new(PipelineConfig::new().with_threads(0));
        assert!(matches!(result, Err(DqError::Config(_))));
    }
}
