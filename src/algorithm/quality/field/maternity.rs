//! Field rule table for maternity episodes

use crate::algorithm::quality::field::rules::{CodeRule, EPISODE_DATE, IntRule, PATIENT_ID};
use crate::algorithm::quality::field::{FieldAccess, FieldCheck};
use crate::models::{CheckDef, MaternityRecord, QualityCode};

pub const EXTRACT_ID: CodeRule = CodeRule::matching(is_extract_id);

/// Provider codes are 3-5 uppercase alphanumerics
pub const PROVIDER_CODE: CodeRule = CodeRule::matching(is_provider_code);

/// 1-87 in spell order, 98 not applicable, 99 not known
pub const EPIORDER: IntRule = IntRule::valid(&[1..=87]).with_sentinels(&[
    (98, QualityCode::NotApplicable),
    (99, QualityCode::Unknown),
]);

pub const MATAGE: IntRule = IntRule::valid(&[13..=50])
    .with_doubtful(&[10..=12, 51..=55])
    .with_infeasible(&[1..=9, 56..=70]);

pub const NUMPREG: IntRule = IntRule::valid(&[0..=19])
    .with_doubtful(&[20..=29])
    .with_sentinels(&[(99, QualityCode::Unknown)]);

/// Up to triplets is routine; 4-6 babies is valid but rare
pub const NUMBABY: IntRule = IntRule::valid(&[1..=3])
    .with_doubtful(&[4..=6])
    .with_sentinels(&[(9, QualityCode::Unknown)]);

pub const DELONSET: IntRule =
    IntRule::valid(&[1..=5]).with_sentinels(&[(9, QualityCode::Unknown)]);

pub const ANAGEST: IntRule =
    IntRule::valid(&[0..=49]).with_sentinels(&[(99, QualityCode::Unknown)]);

fn is_extract_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| !c.is_control())
}

fn is_provider_code(value: &str) -> bool {
    (3..=5).contains(&value.len())
        && value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

pub static MATERNITY_FIELD_CHECKS: &[FieldCheck<MaternityRecord>] = &[
    FieldCheck {
        def: CheckDef::field("dq_extract_id"),
        access: FieldAccess::Code(|r| r.extract_id.as_deref(), EXTRACT_ID),
    },
    FieldCheck {
        def: CheckDef::field("dq_provider_code"),
        access: FieldAccess::Code(|r| r.provider_code.as_deref(), PROVIDER_CODE),
    },
    FieldCheck {
        def: CheckDef::field("dq_patient_id"),
        access: FieldAccess::Code(|r| r.patient_id.as_deref(), PATIENT_ID),
    },
    FieldCheck {
        def: CheckDef::field("dq_epistart"),
        access: FieldAccess::Date(|r| r.epistart, EPISODE_DATE),
    },
    FieldCheck {
        def: CheckDef::field("dq_epiorder"),
        access: FieldAccess::Int(|r| r.epiorder, EPIORDER),
    },
    FieldCheck {
        def: CheckDef::field("dq_admidate"),
        access: FieldAccess::Date(|r| r.admidate, EPISODE_DATE),
    },
    FieldCheck {
        def: CheckDef::field("dq_matage"),
        access: FieldAccess::Int(|r| r.matage, MATAGE),
    },
    FieldCheck {
        def: CheckDef::field("dq_numpreg"),
        access: FieldAccess::Int(|r| r.numpreg, NUMPREG),
    },
    FieldCheck {
        def: CheckDef::field("dq_numbaby"),
        access: FieldAccess::Int(|r| r.numbaby, NUMBABY),
    },
    FieldCheck {
        def: CheckDef::field("dq_delonset"),
        access: FieldAccess::Int(|r| r.delonset, DELONSET),
    },
    FieldCheck {
        def: CheckDef::field("dq_anagest"),
        access: FieldAccess::Int(|r| r.anagest, ANAGEST),
    },
];
