//! General admitted-patient episode record
//!
//! One row per consultant episode: who the patient is, when the episode ran,
//! basic demographics and the first diagnosis slots.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::count_populated;
use crate::models::record::{DqRecord, known_date};

/// Number of diagnosis slots carried on a general episode
pub const DIAGNOSIS_SLOTS: usize = 4;

/// A general hospital episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Pseudonymised patient identifier
    pub patient_id: Option<String>,
    /// Date of birth
    pub dob: Option<NaiveDate>,
    /// Episode start date
    pub epistart: Option<NaiveDate>,
    /// Episode end date
    pub epiend: Option<NaiveDate>,
    /// Sex code (0 not known, 1 male, 2 female, 9 not specified)
    pub sex: Option<i32>,
    /// Ethnic category code
    pub ethnos: Option<String>,
    /// Primary diagnosis (ICD-10)
    pub diag_01: Option<String>,
    /// Secondary diagnosis 1
    pub diag_02: Option<String>,
    /// Secondary diagnosis 2
    pub diag_03: Option<String>,
    /// Secondary diagnosis 3
    pub diag_04: Option<String>,
}

/// Natural key of a general episode
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpisodeKey {
    pub patient_id: Option<String>,
    pub dob: Option<NaiveDate>,
    pub epistart: Option<NaiveDate>,
    pub epiend: Option<NaiveDate>,
}

impl EpisodeRecord {
    /// Create an episode for a patient with the given dates
    #[must_use]
    pub fn new(
        patient_id: impl Into<String>,
        dob: Option<NaiveDate>,
        epistart: Option<NaiveDate>,
        epiend: Option<NaiveDate>,
    ) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            dob,
            epistart,
            epiend,
            ..Self::default()
        }
    }

    /// Set the sex code
    #[must_use]
    pub fn with_sex(mut self, sex: i32) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Set the ethnic category
    #[must_use]
    pub fn with_ethnos(mut self, ethnos: impl Into<String>) -> Self {
        self.ethnos = Some(ethnos.into());
        self
    }

    /// Fill diagnosis slots in order, starting with the primary diagnosis
    #[must_use]
    pub fn with_diagnoses(mut self, codes: &[&str]) -> Self {
        let mut slots = codes.iter().map(|code| Some((*code).to_string()));
        self.diag_01 = slots.next().flatten();
        self.diag_02 = slots.next().flatten();
        self.diag_03 = slots.next().flatten();
        self.diag_04 = slots.next().flatten();
        self
    }

    /// Diagnosis slots in order
    #[must_use]
    pub fn diagnoses(&self) -> [Option<&str>; DIAGNOSIS_SLOTS] {
        [
            self.diag_01.as_deref(),
            self.diag_02.as_deref(),
            self.diag_03.as_deref(),
            self.diag_04.as_deref(),
        ]
    }
}

impl DqRecord for EpisodeRecord {
    type Key = EpisodeKey;

    const VARIANT: &'static str = "episode";

    fn natural_key(&self) -> EpisodeKey {
        EpisodeKey {
            patient_id: self.patient_id.clone(),
            dob: self.dob,
            epistart: self.epistart,
            epiend: self.epiend,
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    fn occurrence_date(&self) -> Option<NaiveDate> {
        known_date(self.epistart)
    }

    fn populated_field_count(&self) -> usize {
        count_populated!(
            self.patient_id,
            self.dob,
            self.epistart,
            self.epiend,
            self.sex,
            self.ethnos,
            self.diag_01,
            self.diag_02,
            self.diag_03,
            self.diag_04,
        )
    }

    fn arrow_fields() -> Vec<FieldRef> {
        vec![
            Arc::new(Field::new("patient_id", DataType::Utf8, true)),
            Arc::new(Field::new("dob", DataType::Date32, true)),
            Arc::new(Field::new("epistart", DataType::Date32, true)),
            Arc::new(Field::new("epiend", DataType::Date32, true)),
            Arc::new(Field::new("sex", DataType::Int32, true)),
            Arc::new(Field::new("ethnos", DataType::Utf8, true)),
            Arc::new(Field::new("diag_01", DataType::Utf8, true)),
            Arc::new(Field::new("diag_02", DataType::Utf8, true)),
            Arc::new(Field::new("diag_03", DataType::Utf8, true)),
            Arc::new(Field::new("diag_04", DataType::Utf8, true)),
        ]
    }
}
