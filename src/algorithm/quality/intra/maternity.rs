//! Intra-record checks for maternity episodes
//!
//! Each of the three baby slots is checked against the number of babies
//! delivered: slots beyond `numbaby` should be blank, slots within it should
//! hold legal values.

use crate::algorithm::quality::field::rules::{CodeRule, IntRule};
use crate::algorithm::quality::intra::{BirthWeightPlausibilityScorer, IntraCheck, gated};
use crate::models::{CheckDef, MaternityRecord, QualityCode, known_date};

/// 1 live birth, 2-4 stillbirth, 9 not known
pub const BIRSTAT: IntRule = IntRule::valid(&[1..=4]).with_sentinels(&[(9, QualityCode::Unknown)]);

/// Grams; 7000 stands for "7000 or more", 9999 for not known
pub const BIRWEIT: IntRule =
    IntRule::valid(&[1..=7000]).with_sentinels(&[(9999, QualityCode::Unknown)]);

pub const GESTAT: IntRule = IntRule::valid(&[10..=49]).with_sentinels(&[(99, QualityCode::Unknown)]);

pub const SEXBABY: IntRule = IntRule::valid(&[1..=2]).with_sentinels(&[
    (0, QualityCode::Unknown),
    (3, QualityCode::Other),
    (9, QualityCode::NotApplicable),
]);

pub const DELMETH: CodeRule = CodeRule::listed(&["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"])
    .with_sentinels(&[("X", QualityCode::Unknown)]);

/// Per-baby field checked against the expected number of babies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BabyField {
    BirthStatus,
    BirthWeight,
    Gestation,
    Sex,
    DeliveryMethod,
}

/// Gated score of one field of one baby slot
#[must_use]
pub fn baby_field(record: &MaternityRecord, slot: usize, field: BabyField) -> QualityCode {
    let Some(baby) = record.baby(slot) else {
        return QualityCode::Valid;
    };
    let expected = record.is_slot_expected(slot);

    match field {
        BabyField::BirthStatus => gated(expected, baby.birstat, |v| BIRSTAT.evaluate(Some(v))),
        BabyField::BirthWeight => gated(expected, baby.birweit, |v| BIRWEIT.evaluate(Some(v))),
        BabyField::Gestation => gated(expected, baby.gestat, |v| GESTAT.evaluate(Some(v))),
        BabyField::Sex => gated(expected, baby.sexbaby, |v| SEXBABY.evaluate(Some(v))),
        BabyField::DeliveryMethod => {
            gated(expected, baby.delmeth, |v| DELMETH.evaluate(Some(v)))
        }
    }
}

/// Birth weight plausibility of one baby slot; slots not expected have nothing to check
#[must_use]
pub fn baby_weight_plausibility(record: &MaternityRecord, slot: usize) -> QualityCode {
    match record.baby(slot) {
        Some(baby) if record.is_slot_expected(slot) => BirthWeightPlausibilityScorer::score(
            baby.birstat,
            baby.gestat,
            baby.sexbaby,
            baby.birweit,
        ),
        _ => QualityCode::Valid,
    }
}

/// Admission cannot follow the start of the episode it opens
fn admission_order(record: &MaternityRecord) -> QualityCode {
    match (known_date(record.admidate), known_date(record.epistart)) {
        (Some(admitted), Some(start)) if admitted > start => QualityCode::Infeasible,
        (Some(_), Some(_)) => QualityCode::Valid,
        _ => QualityCode::Missing,
    }
}

macro_rules! maternity_intra_checks {
    ($($slot:literal),+) => {
        pub static MATERNITY_INTRA_CHECKS: &[IntraCheck<MaternityRecord>] = &[
            IntraCheck {
                def: CheckDef::intra("dq_intra_admission_order"),
                eval: admission_order,
            },
            $(
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_birstat_", $slot)),
                    eval: |r| baby_field(r, $slot, BabyField::BirthStatus),
                },
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_birweit_", $slot)),
                    eval: |r| baby_field(r, $slot, BabyField::BirthWeight),
                },
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_gestat_", $slot)),
                    eval: |r| baby_field(r, $slot, BabyField::Gestation),
                },
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_sexbaby_", $slot)),
                    eval: |r| baby_field(r, $slot, BabyField::Sex),
                },
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_delmeth_", $slot)),
                    eval: |r| baby_field(r, $slot, BabyField::DeliveryMethod),
                },
                IntraCheck {
                    def: CheckDef::intra(concat!("dq_intra_bw_plausibility_", $slot)),
                    eval: |r| baby_weight_plausibility(r, $slot),
                },
            )+
        ];
    };
}

maternity_intra_checks!(1, 2, 3);
