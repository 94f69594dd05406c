//! Conversion between records and arrow record batches
//!
//! Records go through `serde_arrow` with the explicit schema of their variant,
//! so dates land in `Date32` columns. Scored output appends the derived
//! columns to the record columns.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int32Array, Int64Array, StringArray, UInt8Array,
    UInt32Array, UInt64Array,
};
use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::algorithm::quality::QualityRules;
use crate::error::Result;
use crate::models::{CheckWeights, DqRecord, ScoredPartition};

/// Arrow schema of a record variant
#[must_use]
pub fn record_schema<R: DqRecord>() -> Schema {
    Schema::new(R::arrow_fields())
}

/// Convert records into a record batch
pub fn records_to_batch<R: DqRecord + Serialize>(records: &[R]) -> Result<RecordBatch> {
    Ok(serde_arrow::to_record_batch(&R::arrow_fields(), &records)?)
}

/// Convert a record batch into records
pub fn records_from_batch<R: DqRecord + DeserializeOwned>(batch: &RecordBatch) -> Result<Vec<R>> {
    Ok(serde_arrow::from_record_batch(batch)?)
}

/// Convert several record batches into records
pub fn records_from_batches<R: DqRecord + DeserializeOwned>(
    batches: &[RecordBatch],
) -> Result<Vec<R>> {
    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in batches {
        records.extend(records_from_batch::<R>(batch)?);
    }
    Ok(records)
}

fn field(name: &str, data_type: DataType, nullable: bool) -> FieldRef {
    Arc::new(Field::new(name, data_type, nullable))
}

/// Record columns followed by group, retention, check and total columns
pub fn scored_partition_to_batch<R: QualityRules + Serialize>(
    partition: &ScoredPartition<R>,
) -> Result<RecordBatch> {
    let records: Vec<&R> = partition.records.iter().map(|r| &r.record).collect();
    let record_batch = serde_arrow::to_record_batch(&R::arrow_fields(), &records)?;

    let mut fields: Vec<FieldRef> = record_batch.schema().fields().iter().cloned().collect();
    let mut columns: Vec<ArrayRef> = record_batch.columns().to_vec();
    let scored = &partition.records;

    let mut push = |f: FieldRef, column: ArrayRef| {
        fields.push(f);
        columns.push(column);
    };

    push(
        field("partition", DataType::Int32, false),
        Arc::new(Int32Array::from(vec![partition.partition; scored.len()])),
    );
    push(
        field("group_id", DataType::UInt64, false),
        Arc::new(UInt64Array::from_iter_values(
            scored.iter().map(|r| r.group.group_id as u64),
        )),
    );
    push(
        field("ith_duplicate", DataType::UInt64, false),
        Arc::new(UInt64Array::from_iter_values(
            scored.iter().map(|r| r.group.ith_duplicate as u64),
        )),
    );
    push(
        field("group_size", DataType::UInt64, false),
        Arc::new(UInt64Array::from_iter_values(
            scored.iter().map(|r| r.group.group_size as u64),
        )),
    );
    push(
        field("populated_fields", DataType::UInt64, false),
        Arc::new(UInt64Array::from_iter_values(
            scored.iter().map(|r| r.populated_fields as u64),
        )),
    );
    push(
        field("is_first", DataType::Boolean, false),
        Arc::new(BooleanArray::from_iter(
            scored.iter().map(|r| Some(r.retention.is_first)),
        )),
    );
    push(
        field("is_most_complete", DataType::Boolean, false),
        Arc::new(BooleanArray::from_iter(
            scored.iter().map(|r| Some(r.retention.is_most_complete)),
        )),
    );
    push(
        field("interval_weeks", DataType::Int64, true),
        Arc::new(Int64Array::from_iter(scored.iter().map(|r| r.interval_weeks))),
    );

    for (position, def) in R::check_defs().into_iter().enumerate() {
        push(
            field(def.name, DataType::UInt8, false),
            Arc::new(UInt8Array::from_iter_values(
                scored.iter().map(|r| r.scores[position].code.as_u8()),
            )),
        );
        push(
            field(&format!("{}_scaled", def.name), DataType::UInt32, false),
            Arc::new(UInt32Array::from_iter_values(
                scored.iter().map(|r| r.scores[position].scaled()),
            )),
        );
    }

    push(
        field("unadjusted_total", DataType::UInt32, false),
        Arc::new(UInt32Array::from_iter_values(
            scored.iter().map(|r| r.unadjusted_total),
        )),
    );
    push(
        field("adjusted_total", DataType::Float64, false),
        Arc::new(Float64Array::from_iter_values(
            scored.iter().map(|r| r.adjusted_total),
        )),
    );

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// One row per check: partition, check name, category and weight
pub fn weights_to_batch(weights: &CheckWeights) -> Result<RecordBatch> {
    let schema = Schema::new(vec![
        field("partition", DataType::Int32, false),
        field("check", DataType::Utf8, false),
        field("category", DataType::Utf8, false),
        field("weight", DataType::Float64, false),
    ]);
    let rows = &weights.weights;

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(vec![weights.partition; rows.len()])),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|w| w.check.name))),
        Arc::new(StringArray::from_iter_values(
            rows.iter().map(|w| w.check.category.label()),
        )),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|w| w.weight))),
    ];

    Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
}
