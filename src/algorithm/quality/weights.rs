//! Partition-wide check weights
//!
//! A check's weight is the mean of its rescaled value over all records of the
//! partition, divided by the category maximum. A check that almost always
//! passes therefore weighs close to 1, and a failure on it costs more.

use log::debug;
use rayon::prelude::*;

use crate::error::{DqError, Result};
use crate::models::{CheckScore, CheckWeight, CheckWeights};

/// Derives check weights from the score cards of one partition
pub struct WeightDeriver;

impl WeightDeriver {
    /// Derive one weight per check.
    ///
    /// Every card must share the layout of the first one. An empty partition
    /// has no defined weights and is reported as `EmptyPartition`.
    pub fn derive(partition: i32, cards: &[Vec<CheckScore>]) -> Result<CheckWeights> {
        let Some(template) = cards.first() else {
            return Err(DqError::EmptyPartition { partition });
        };

        for card in cards {
            Self::check_layout(template, card)?;
        }

        let count = cards.len();
        let weights: Vec<CheckWeight> = template
            .par_iter()
            .enumerate()
            .map(|(position, score)| {
                let total: u64 = cards
                    .iter()
                    .map(|card| u64::from(card[position].scaled()))
                    .sum();
                let mean = total as f64 / count as f64;
                CheckWeight {
                    check: score.check,
                    weight: mean / f64::from(score.check.category.max_scaled()),
                    contributing: count,
                }
            })
            .collect();

        debug!(
            "Derived {} check weights for partition {} over {} records",
            weights.len(),
            partition,
            count
        );

        Ok(CheckWeights {
            partition,
            weights,
        })
    }

    /// Verify that `card` has the same checks as `template`, in order
    pub fn check_layout(template: &[CheckScore], card: &[CheckScore]) -> Result<()> {
        if template.len() != card.len() {
            return Err(DqError::CheckMismatch {
                position: template.len().min(card.len()),
                expected: format!("{} checks", template.len()),
                found: format!("{} checks", card.len()),
            });
        }

        match template
            .iter()
            .zip(card)
            .position(|(expected, found)| expected.check != found.check)
        {
            Some(position) => Err(DqError::CheckMismatch {
                position,
                expected: template[position].check.name.to_string(),
                found: card[position].check.name.to_string(),
            }),
            None => Ok(()),
        }
    }
}
