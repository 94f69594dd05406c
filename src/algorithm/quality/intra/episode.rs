//! Intra-record checks for general episodes

use crate::algorithm::quality::field::rules::MAX_PLAUSIBLE_AGE;
use crate::algorithm::quality::intra::IntraCheck;
use crate::models::{CheckDef, EpisodeRecord, QualityCode, known_date};

pub static EPISODE_INTRA_CHECKS: &[IntraCheck<EpisodeRecord>] = &[
    IntraCheck {
        def: CheckDef::intra("dq_intra_episode_order"),
        eval: episode_order,
    },
    IntraCheck {
        def: CheckDef::intra("dq_intra_age_at_start"),
        eval: age_at_start,
    },
    IntraCheck {
        def: CheckDef::intra("dq_intra_diag_sequence"),
        eval: diagnosis_sequence,
    },
];

/// The episode cannot end before it starts
fn episode_order(record: &EpisodeRecord) -> QualityCode {
    match (known_date(record.epistart), known_date(record.epiend)) {
        (Some(start), Some(end)) if end < start => QualityCode::Infeasible,
        (Some(_), Some(_)) => QualityCode::Valid,
        _ => QualityCode::Missing,
    }
}

fn age_at_start(record: &EpisodeRecord) -> QualityCode {
    let (Some(dob), Some(start)) = (known_date(record.dob), known_date(record.epistart)) else {
        return QualityCode::Missing;
    };
    match start.years_since(dob) {
        None => QualityCode::Infeasible,
        Some(age) if age > MAX_PLAUSIBLE_AGE as u32 => QualityCode::Doubtful,
        Some(_) => QualityCode::Valid,
    }
}

/// Diagnoses fill slots from the first one; a code after a blank slot is illegal
fn diagnosis_sequence(record: &EpisodeRecord) -> QualityCode {
    let mut seen_blank = false;
    for slot in record.diagnoses() {
        match slot {
            None => seen_blank = true,
            Some(_) if seen_blank => return QualityCode::Illegal,
            Some(_) => {}
        }
    }
    QualityCode::Valid
}
