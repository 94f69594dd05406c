//! Field rule table for general episodes

use crate::algorithm::quality::field::rules::{
    BIRTH_DATE, CodeRule, EPISODE_DATE, IntRule, PATIENT_ID, is_icd10_code,
};
use crate::algorithm::quality::field::{FieldAccess, FieldCheck};
use crate::models::{CheckDef, EpisodeRecord, QualityCode};

/// 0 not known, 1 male, 2 female, 9 not specified
pub const SEX: IntRule = IntRule::valid(&[1..=2]).with_sentinels(&[
    (0, QualityCode::Unknown),
    (9, QualityCode::NotApplicable),
]);

/// Ethnic category: S is "any other", Z "not stated", X and 99 "not known"
pub const ETHNOS: CodeRule = CodeRule::listed(&[
    "A", "B", "C", "D", "E", "F", "G", "H", "J", "K", "L", "M", "N", "P", "R",
])
.with_sentinels(&[
    ("S", QualityCode::Other),
    ("Z", QualityCode::NotApplicable),
    ("X", QualityCode::Unknown),
    ("99", QualityCode::Unknown),
]);

/// Primary diagnosis; R69/R69X is "illness, unspecified"
pub const PRIMARY_DIAGNOSIS: CodeRule = CodeRule::matching(is_icd10_code).with_sentinels(&[
    ("R69", QualityCode::Unknown),
    ("R69X", QualityCode::Unknown),
]);

pub static EPISODE_FIELD_CHECKS: &[FieldCheck<EpisodeRecord>] = &[
    FieldCheck {
        def: CheckDef::field("dq_patient_id"),
        access: FieldAccess::Code(|r| r.patient_id.as_deref(), PATIENT_ID),
    },
    FieldCheck {
        def: CheckDef::field("dq_dob"),
        access: FieldAccess::Date(|r| r.dob, BIRTH_DATE),
    },
    FieldCheck {
        def: CheckDef::field("dq_epistart"),
        access: FieldAccess::Date(|r| r.epistart, EPISODE_DATE),
    },
    FieldCheck {
        def: CheckDef::field("dq_epiend"),
        access: FieldAccess::Date(|r| r.epiend, EPISODE_DATE),
    },
    FieldCheck {
        def: CheckDef::field("dq_sex"),
        access: FieldAccess::Int(|r| r.sex, SEX),
    },
    FieldCheck {
        def: CheckDef::field("dq_ethnos"),
        access: FieldAccess::Code(|r| r.ethnos.as_deref(), ETHNOS),
    },
    FieldCheck {
        def: CheckDef::field("dq_diag_01"),
        access: FieldAccess::Code(|r| r.diag_01.as_deref(), PRIMARY_DIAGNOSIS),
    },
];
