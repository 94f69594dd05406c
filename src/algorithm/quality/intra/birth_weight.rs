//! Birth weight plausibility for a given sex and gestational age
//!
//! The band table only holds bounds with a documented source. At present that
//! is a single bound: a live-born boy at 24 completed weeks weighs at least
//! 326 g. Every other (sex, week) pair is unconstrained until sourced centile
//! bounds are added. Bounds are never interpolated between or extrapolated
//! beyond tabulated weeks.

use std::ops::RangeInclusive;

use crate::models::QualityCode;

/// Weights above this many grams are implausible for any gestation
pub const IMPLAUSIBLE_WEIGHT_ABOVE: i32 = 7000;

/// Legal birth status codes (1 live birth, 2-4 stillbirth)
pub const LEGAL_BIRTH_STATUS: RangeInclusive<i32> = 1..=4;

/// Sexes the weight bands are defined for (1 male, 2 female)
pub const LEGAL_SEX: RangeInclusive<i32> = 1..=2;

/// Legal gestational ages in completed weeks
pub const LEGAL_GESTATION: RangeInclusive<i32> = 10..=49;

const LIVE_BIRTH: i32 = 1;
const MALE: i32 = 1;

/// Plausible weight (grams, inclusive) for one sex and gestational week.
///
/// A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightBand {
    pub sex: i32,
    pub week: i32,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl WeightBand {
    /// Whether `weight` lies within the band
    #[must_use]
    pub fn admits(&self, weight: i32) -> bool {
        self.min.is_none_or(|min| weight >= min) && self.max.is_none_or(|max| weight <= max)
    }
}

pub static WEIGHT_BANDS: &[WeightBand] = &[WeightBand {
    sex: MALE,
    week: 24,
    min: Some(326),
    max: None,
}];

/// Plausible weight band for a sex and gestational week, if tabulated
#[must_use]
pub fn plausible_weight(sex: i32, week: i32) -> Option<&'static WeightBand> {
    WEIGHT_BANDS
        .iter()
        .find(|band| band.sex == sex && band.week == week)
}

/// Scores whether a live-born baby's weight fits its sex and gestation
pub struct BirthWeightPlausibilityScorer;

impl BirthWeightPlausibilityScorer {
    #[must_use]
    pub fn score(
        status: Option<i32>,
        gestation: Option<i32>,
        sex: Option<i32>,
        weight: Option<i32>,
    ) -> QualityCode {
        let (Some(status), Some(gestation), Some(sex), Some(weight)) =
            (status, gestation, sex, weight)
        else {
            return QualityCode::Missing;
        };

        if !LEGAL_BIRTH_STATUS.contains(&status)
            || !LEGAL_SEX.contains(&sex)
            || !LEGAL_GESTATION.contains(&gestation)
        {
            return QualityCode::Missing;
        }

        // Bands only describe live births
        if status != LIVE_BIRTH {
            return QualityCode::Valid;
        }

        if weight > IMPLAUSIBLE_WEIGHT_ABOVE {
            return QualityCode::Doubtful;
        }

        match plausible_weight(sex, gestation) {
            Some(band) if !band.admits(weight) => QualityCode::Infeasible,
            _ => QualityCode::Valid,
        }
    }
}
