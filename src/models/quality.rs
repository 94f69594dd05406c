//! Quality code taxonomy
//!
//! Every check, whether it looks at one field, several fields of one record or
//! a pair of records, classifies its outcome on the same eight-point ordinal
//! scale. Checks are tagged with the category they belong to; the category
//! fixes the rescaling factor applied before aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal data-quality classification for a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum QualityCode {
    /// Value outside the entire legal range of the field
    Illegal = 1,
    /// Medically or logically infeasible value
    Infeasible = 2,
    /// Missing or invalid value
    Missing = 3,
    /// Explicit "not known"
    Unknown = 4,
    /// Explicit "not applicable" or "not specified"
    NotApplicable = 5,
    /// Explicit "other"
    Other = 6,
    /// Valid but doubtful value
    Doubtful = 7,
    /// Valid value
    Valid = 8,
}

impl QualityCode {
    /// Highest code on the scale
    pub const MAX: u8 = 8;

    /// Convert a numeric code (1-8) to `QualityCode`
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Illegal),
            2 => Some(Self::Infeasible),
            3 => Some(Self::Missing),
            4 => Some(Self::Unknown),
            5 => Some(Self::NotApplicable),
            6 => Some(Self::Other),
            7 => Some(Self::Doubtful),
            8 => Some(Self::Valid),
            _ => None,
        }
    }

    /// Numeric value of this code
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Short description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Illegal => "illegal value",
            Self::Infeasible => "infeasible value",
            Self::Missing => "missing or invalid",
            Self::Unknown => "not known",
            Self::NotApplicable => "not applicable or not specified",
            Self::Other => "other",
            Self::Doubtful => "valid but doubtful",
            Self::Valid => "valid",
        }
    }
}

impl fmt::Display for QualityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.description())
    }
}

/// Category of a check, which determines how its code is rescaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckCategory {
    /// Single field checks, scaled x1
    Field,
    /// Cross-field checks within a record, scaled x10
    Intra,
    /// Checks against another record of the same entity, scaled x100
    Inter,
}

impl CheckCategory {
    /// Factor applied to the raw code before aggregation
    #[must_use]
    pub const fn scale(self) -> u32 {
        match self {
            Self::Field => 1,
            Self::Intra => 10,
            Self::Inter => 100,
        }
    }

    /// Highest attainable rescaled value (8, 80 or 800)
    #[must_use]
    pub const fn max_scaled(self) -> u32 {
        QualityCode::MAX as u32 * self.scale()
    }

    /// Lower-case label used in output columns
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Intra => "intra",
            Self::Inter => "inter",
        }
    }
}

/// A named check and its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDef {
    /// Output column name, e.g. `dq_sex`
    pub name: &'static str,
    /// Category of the check
    pub category: CheckCategory,
}

impl CheckDef {
    /// Define a single field check
    #[must_use]
    pub const fn field(name: &'static str) -> Self {
        Self { name, category: CheckCategory::Field }
    }

    /// Define an intra-record check
    #[must_use]
    pub const fn intra(name: &'static str) -> Self {
        Self { name, category: CheckCategory::Intra }
    }

    /// Define an inter-record check
    #[must_use]
    pub const fn inter(name: &'static str) -> Self {
        Self { name, category: CheckCategory::Inter }
    }
}

/// Outcome of one check on one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckScore {
    /// The check that produced the code
    pub check: CheckDef,
    /// Raw code
    pub code: QualityCode,
}

impl CheckScore {
    #[must_use]
    pub const fn new(check: CheckDef, code: QualityCode) -> Self {
        Self { check, code }
    }

    /// Code multiplied by the category's scale factor
    #[must_use]
    pub const fn scaled(&self) -> u32 {
        self.code.as_u8() as u32 * self.check.category.scale()
    }
}
