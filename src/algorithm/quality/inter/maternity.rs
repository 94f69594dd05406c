//! Inter-record checks for maternity episodes

use std::ops::RangeInclusive;

use crate::algorithm::quality::inter::{InterCheck, InterContext, is_duplicate};
use crate::models::{CheckDef, MaternityRecord, QualityCode};

/// Fewer weeks than this between deliveries of live births is infeasible
pub const MIN_FEASIBLE_INTERVAL_WEEKS: i64 = 23;

/// Intervals just above the infeasible limit are doubtful
pub const DOUBTFUL_INTERVAL_WEEKS: RangeInclusive<i64> = 23..=25;

pub static MATERNITY_INTER_CHECKS: &[InterCheck<MaternityRecord>] = &[
    InterCheck {
        def: CheckDef::inter("dq_inter_interval"),
        eval: delivery_interval,
    },
    InterCheck {
        def: CheckDef::inter("dq_inter_is_duplicate"),
        eval: is_duplicate,
    },
];

/// Weeks since the mother's previous delivery, for live births only
fn delivery_interval(
    record: &MaternityRecord,
    ctx: &InterContext<'_, MaternityRecord>,
) -> QualityCode {
    if !record.all_live_births() {
        return QualityCode::Valid;
    }
    match ctx.interval_weeks {
        Some(weeks) if weeks < MIN_FEASIBLE_INTERVAL_WEEKS => QualityCode::Infeasible,
        Some(weeks) if DOUBTFUL_INTERVAL_WEEKS.contains(&weeks) => QualityCode::Doubtful,
        _ => QualityCode::Valid,
    }
}
