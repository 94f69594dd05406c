#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use arrow::array::{Array, Float64Array, UInt8Array};
    use arrow::datatypes::DataType;
    use episode_dq::utils::arrow::{
        record_schema, records_from_batches, records_to_batch, scored_partition_to_batch,
        weights_to_batch,
    };
    use episode_dq::utils::io::{read_parquet, write_parquet};
    use episode_dq::{DqRecord, MaternityRecord, PipelineConfig, QualityPipeline, QualityRules};

    use crate::utils::{date, live_delivery};

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("episode_dq_{}_{name}", std::process::id()))
    }

    fn deliveries() -> Vec<MaternityRecord> {
        vec![
            live_delivery("E1", "M1", date(2015, 3, 1)),
            live_delivery("E2", "M1", date(2015, 3, 15)),
            MaternityRecord {
                numbaby: Some(2),
                ..live_delivery("E3", "M2", date(2015, 6, 1))
            }
            .with_baby(2, Some(1), Some(2800), Some(37), Some(2), Some("1")),
        ]
    }

    #[test]
    fn test_records_survive_parquet() {
        let path = temp_file("records.parquet");
        let records = deliveries();

        write_parquet(&path, &records_to_batch(&records).unwrap()).unwrap();
        let batches = read_parquet(&path, Some(&record_schema::<MaternityRecord>())).unwrap();
        let back: Vec<MaternityRecord> = records_from_batches(&batches).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back, records);
    }

    #[test]
    fn test_scored_output_columns() {
        let pipeline = QualityPipeline::<MaternityRecord>::new(PipelineConfig::default()).unwrap();
        let scored = pipeline.score_partition(2015, deliveries()).unwrap();

        let batch = scored_partition_to_batch(&scored).unwrap();
        let schema = batch.schema();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(
            batch.num_columns(),
            MaternityRecord::arrow_fields().len() + 8 + 2 * MaternityRecord::check_count() + 2
        );

        let interval = batch.column(schema.index_of("interval_weeks").unwrap());
        assert_eq!(interval.data_type(), &DataType::Int64);
        assert!(interval.is_null(0));
        assert_eq!(interval.null_count(), 2);

        let codes = batch
            .column(schema.index_of("dq_inter_interval").unwrap())
            .as_any()
            .downcast_ref::<UInt8Array>()
            .unwrap();
        assert_eq!(codes.value(1), 2);

        let totals = batch
            .column(schema.index_of("adjusted_total").unwrap())
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert!((totals.value(2) - scored.records[2].adjusted_total).abs() < 1e-12);

        let path = temp_file("scored.parquet");
        write_parquet(&path, &batch).unwrap();
        let rows: usize = read_parquet(&path, None)
            .unwrap()
            .iter()
            .map(|b| b.num_rows())
            .sum();
        std::fs::remove_file(&path).ok();
        assert_eq!(rows, 3);

        let weights = weights_to_batch(&scored.weights).unwrap();
        assert_eq!(weights.num_rows(), MaternityRecord::check_count());
    }
}
