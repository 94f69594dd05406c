//! Domain models
//!
//! Record variants accepted by the pipeline, the quality code taxonomy and the
//! scored output.

pub mod episode;
pub mod maternity;
pub mod quality;
pub mod record;
pub mod scored;

pub use episode::{EpisodeKey, EpisodeRecord};
pub use maternity::{Baby, MaternityKey, MaternityRecord};
pub use quality::{CheckCategory, CheckDef, CheckScore, QualityCode};
pub use record::{DqRecord, is_sentinel_date, known_date};
pub use scored::{
    CheckWeight, CheckWeights, GroupAssignment, RetentionFlags, ScoredPartition, ScoredRecord,
};
