//! Per-record totals

use crate::error::{DqError, Result};
use crate::models::{CheckScore, CheckWeights};

/// Unadjusted and weight-adjusted totals of one score card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub unadjusted: u32,
    pub adjusted: f64,
}

/// Combines a score card with its partition weights
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sum of rescaled values, plain and multiplied by each check's weight
    pub fn aggregate(scores: &[CheckScore], weights: &CheckWeights) -> Result<Totals> {
        if scores.len() != weights.len() {
            return Err(DqError::CheckMismatch {
                position: scores.len().min(weights.len()),
                expected: format!("{} checks", weights.len()),
                found: format!("{} checks", scores.len()),
            });
        }
        if let Some(position) = scores
            .iter()
            .zip(&weights.weights)
            .position(|(score, weight)| score.check != weight.check)
        {
            return Err(DqError::CheckMismatch {
                position,
                expected: weights.weights[position].check.name.to_string(),
                found: scores[position].check.name.to_string(),
            });
        }

        let (unadjusted, adjusted) = scores.iter().zip(&weights.weights).fold(
            (0u32, 0.0f64),
            |(plain, weighted), (score, weight)| {
                let scaled = score.scaled();
                (plain + scaled, weighted + f64::from(scaled) * weight.weight)
            },
        );

        Ok(Totals {
            unadjusted,
            adjusted,
        })
    }
}
