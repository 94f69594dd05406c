//! Maternity (delivery) episode record
//!
//! A delivery episode carries the mother's details and a tail of per-baby
//! fields. Only the first three baby slots are kept; which of them should be
//! filled depends on the number of babies delivered.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::count_populated;
use crate::models::record::{DqRecord, known_date};

/// Number of per-baby slots carried on a maternity record
pub const BABY_SLOTS: usize = 3;

/// Birth status code for a live birth
pub const LIVE_BIRTH: i32 = 1;

/// A delivery episode with per-baby tail fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaternityRecord {
    /// Identifier of the extract the record was delivered in
    pub extract_id: Option<String>,
    /// Code of the provider submitting the episode
    pub provider_code: Option<String>,
    /// Pseudonymised identifier of the mother
    pub patient_id: Option<String>,
    /// Episode start date
    pub epistart: Option<NaiveDate>,
    /// Order of the episode within its spell
    pub epiorder: Option<i32>,
    /// Admission date
    pub admidate: Option<NaiveDate>,
    /// Mother's age at delivery
    pub matage: Option<i32>,
    /// Number of previous pregnancies
    pub numpreg: Option<i32>,
    /// Number of babies delivered
    pub numbaby: Option<i32>,
    /// Onset of labour
    pub delonset: Option<i32>,
    /// Gestation at first antenatal assessment (weeks)
    pub anagest: Option<i32>,
    pub birstat_1: Option<i32>,
    pub birstat_2: Option<i32>,
    pub birstat_3: Option<i32>,
    pub birweit_1: Option<i32>,
    pub birweit_2: Option<i32>,
    pub birweit_3: Option<i32>,
    pub gestat_1: Option<i32>,
    pub gestat_2: Option<i32>,
    pub gestat_3: Option<i32>,
    pub sexbaby_1: Option<i32>,
    pub sexbaby_2: Option<i32>,
    pub sexbaby_3: Option<i32>,
    pub delmeth_1: Option<String>,
    pub delmeth_2: Option<String>,
    pub delmeth_3: Option<String>,
}

/// Fields recorded for one baby of a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Baby<'a> {
    /// Birth status (1 live birth, 2-4 stillbirth, 9 not known)
    pub birstat: Option<i32>,
    /// Birth weight in grams (9999 not known)
    pub birweit: Option<i32>,
    /// Gestational age in completed weeks (99 not known)
    pub gestat: Option<i32>,
    /// Sex of the baby (0 not known, 1 male, 2 female, 3 indeterminate, 9 not specified)
    pub sexbaby: Option<i32>,
    /// Delivery method ("0"-"9", "X" not known)
    pub delmeth: Option<&'a str>,
}

/// Natural key of a maternity episode
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaternityKey {
    pub extract_id: Option<String>,
    pub provider_code: Option<String>,
    pub epistart: Option<NaiveDate>,
    pub epiorder: Option<i32>,
}

impl MaternityRecord {
    /// Create a delivery episode for a mother
    #[must_use]
    pub fn new(
        extract_id: impl Into<String>,
        provider_code: impl Into<String>,
        patient_id: impl Into<String>,
        epistart: Option<NaiveDate>,
        epiorder: i32,
    ) -> Self {
        Self {
            extract_id: Some(extract_id.into()),
            provider_code: Some(provider_code.into()),
            patient_id: Some(patient_id.into()),
            epistart,
            epiorder: Some(epiorder),
            ..Self::default()
        }
    }

    /// Fields of the baby in `slot` (1-based); None for slots beyond the tail
    #[must_use]
    pub fn baby(&self, slot: usize) -> Option<Baby<'_>> {
        let baby = match slot {
            1 => Baby {
                birstat: self.birstat_1,
                birweit: self.birweit_1,
                gestat: self.gestat_1,
                sexbaby: self.sexbaby_1,
                delmeth: self.delmeth_1.as_deref(),
            },
            2 => Baby {
                birstat: self.birstat_2,
                birweit: self.birweit_2,
                gestat: self.gestat_2,
                sexbaby: self.sexbaby_2,
                delmeth: self.delmeth_2.as_deref(),
            },
            3 => Baby {
                birstat: self.birstat_3,
                birweit: self.birweit_3,
                gestat: self.gestat_3,
                sexbaby: self.sexbaby_3,
                delmeth: self.delmeth_3.as_deref(),
            },
            _ => return None,
        };
        Some(baby)
    }

    /// Set all fields of the baby in `slot` (1-based)
    #[must_use]
    pub fn with_baby(
        mut self,
        slot: usize,
        birstat: Option<i32>,
        birweit: Option<i32>,
        gestat: Option<i32>,
        sexbaby: Option<i32>,
        delmeth: Option<&str>,
    ) -> Self {
        let delmeth = delmeth.map(str::to_string);
        match slot {
            1 => {
                (self.birstat_1, self.birweit_1, self.gestat_1) = (birstat, birweit, gestat);
                (self.sexbaby_1, self.delmeth_1) = (sexbaby, delmeth);
            }
            2 => {
                (self.birstat_2, self.birweit_2, self.gestat_2) = (birstat, birweit, gestat);
                (self.sexbaby_2, self.delmeth_2) = (sexbaby, delmeth);
            }
            3 => {
                (self.birstat_3, self.birweit_3, self.gestat_3) = (birstat, birweit, gestat);
                (self.sexbaby_3, self.delmeth_3) = (sexbaby, delmeth);
            }
            _ => log::warn!("Ignoring baby slot {slot}; only {BABY_SLOTS} slots are recorded"),
        }
        self
    }

    /// Number of babies the tail is expected to describe.
    ///
    /// A `numbaby` outside 1..=6 says nothing reliable about multiplicity, so a
    /// singleton delivery is assumed.
    #[must_use]
    pub fn expected_babies(&self) -> usize {
        match self.numbaby {
            Some(n @ 1..=6) => n as usize,
            _ => 1,
        }
    }

    /// Whether the baby in `slot` is expected to be populated
    #[must_use]
    pub fn is_slot_expected(&self, slot: usize) -> bool {
        slot >= 1 && slot <= self.expected_babies()
    }

    /// Whether every expected baby was born alive
    #[must_use]
    pub fn all_live_births(&self) -> bool {
        (1..=self.expected_babies().min(BABY_SLOTS))
            .filter_map(|slot| self.baby(slot))
            .all(|baby| baby.birstat == Some(LIVE_BIRTH))
    }
}

impl DqRecord for MaternityRecord {
    type Key = MaternityKey;

    const VARIANT: &'static str = "maternity";

    fn natural_key(&self) -> MaternityKey {
        MaternityKey {
            extract_id: self.extract_id.clone(),
            provider_code: self.provider_code.clone(),
            epistart: self.epistart,
            epiorder: self.epiorder,
        }
    }

    fn entity_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    fn occurrence_date(&self) -> Option<NaiveDate> {
        known_date(self.admidate)
    }

    fn populated_field_count(&self) -> usize {
        count_populated!(
            self.extract_id,
            self.provider_code,
            self.patient_id,
            self.epistart,
            self.epiorder,
            self.admidate,
            self.matage,
            self.numpreg,
            self.numbaby,
            self.delonset,
            self.anagest,
            self.birstat_1,
            self.birstat_2,
            self.birstat_3,
            self.birweit_1,
            self.birweit_2,
            self.birweit_3,
            self.gestat_1,
            self.gestat_2,
            self.gestat_3,
            self.sexbaby_1,
            self.sexbaby_2,
            self.sexbaby_3,
            self.delmeth_1,
            self.delmeth_2,
            self.delmeth_3,
        )
    }

    fn arrow_fields() -> Vec<FieldRef> {
        let mut fields = vec![
            Field::new("extract_id", DataType::Utf8, true),
            Field::new("provider_code", DataType::Utf8, true),
            Field::new("patient_id", DataType::Utf8, true),
            Field::new("epistart", DataType::Date32, true),
            Field::new("epiorder", DataType::Int32, true),
            Field::new("admidate", DataType::Date32, true),
            Field::new("matage", DataType::Int32, true),
            Field::new("numpreg", DataType::Int32, true),
            Field::new("numbaby", DataType::Int32, true),
            Field::new("delonset", DataType::Int32, true),
            Field::new("anagest", DataType::Int32, true),
        ];
        for name in ["birstat", "birweit", "gestat", "sexbaby"] {
            for slot in 1..=BABY_SLOTS {
                fields.push(Field::new(format!("{name}_{slot}"), DataType::Int32, true));
            }
        }
        for slot in 1..=BABY_SLOTS {
            fields.push(Field::new(format!("delmeth_{slot}"), DataType::Utf8, true));
        }
        fields.into_iter().map(Arc::new).collect()
    }
}
