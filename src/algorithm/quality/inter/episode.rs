//! Inter-record checks for general episodes

use crate::algorithm::quality::inter::{InterCheck, InterContext, is_duplicate};
use crate::models::{CheckDef, DqRecord, EpisodeRecord, QualityCode, known_date};

pub static EPISODE_INTER_CHECKS: &[InterCheck<EpisodeRecord>] = &[
    InterCheck {
        def: CheckDef::inter("dq_inter_overlap"),
        eval: overlap,
    },
    InterCheck {
        def: CheckDef::inter("dq_inter_is_duplicate"),
        eval: is_duplicate,
    },
];

/// The previous episode of a patient must end before the next one starts.
///
/// Exact duplicates are left to `dq_inter_is_duplicate`.
fn overlap(record: &EpisodeRecord, ctx: &InterContext<'_, EpisodeRecord>) -> QualityCode {
    let Some(previous) = ctx.previous else {
        return QualityCode::Valid;
    };
    if previous.natural_key() == record.natural_key() {
        return QualityCode::Valid;
    }
    match (known_date(previous.epiend), known_date(record.epistart)) {
        (Some(end), Some(start)) if end > start => QualityCode::Infeasible,
        _ => QualityCode::Valid,
    }
}
