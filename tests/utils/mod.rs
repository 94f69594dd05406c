//! Record builders shared by the integration tests

use chrono::NaiveDate;
use episode_dq::{EpisodeRecord, MaternityRecord};

pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// An episode with every attribute populated and valid for 2015
pub fn complete_episode(patient: &str, start: Option<NaiveDate>) -> EpisodeRecord {
    let end = start.and_then(|d| d.checked_add_days(chrono::Days::new(2)));
    EpisodeRecord::new(patient, date(1980, 5, 1), start, end)
        .with_sex(2)
        .with_ethnos("A")
        .with_diagnoses(&["O80", "Z37.0", "O70.0", "O99.8"])
}

/// A valid live singleton delivery admitted on `admitted`
pub fn live_delivery(extract: &str, mother: &str, admitted: Option<NaiveDate>) -> MaternityRecord {
    MaternityRecord {
        admidate: admitted,
        matage: Some(31),
        numpreg: Some(1),
        numbaby: Some(1),
        delonset: Some(1),
        anagest: Some(12),
        ..MaternityRecord::new(extract, "RXX", mother, admitted, 1)
    }
    .with_baby(1, Some(1), Some(3400), Some(40), Some(1), Some("0"))
}
