//! Overlap between genotype distributions
//!
//! [`estimate_overlap`] produces the sentences shown under the density
//! plot. Each line reports the overlapping coefficient of dataset `i`'s
//! normal distribution with itself, so every line reads 100.00%; dataset 0
//! is never compared against. [`pairwise_overlap`] gives the coefficient
//! between dataset 0 and each other dataset instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::normal::NormalDist;

/// One human-readable line per dataset after the first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlapReport(Vec<String>);

impl OverlapReport {
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn distributions(means: &[f64], standard_deviations: &[f64]) -> Result<Vec<NormalDist>> {
    if standard_deviations.len() != means.len() {
        return Err(StatsError::LengthMismatch {
            field: "standard_deviations",
            expected: means.len(),
            actual: standard_deviations.len(),
        });
    }
    means
        .iter()
        .zip(standard_deviations)
        .map(|(&mean, &sd)| NormalDist::new(mean, sd))
        .collect()
}

/// Overlap sentences for datasets 1..n
pub fn estimate_overlap(means: &[f64], standard_deviations: &[f64]) -> Result<OverlapReport> {
    let dists = distributions(means, standard_deviations)?;

    let lines = dists
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, dist)| {
            let coefficient = dist.overlap(dist)?;
            Ok(format!(
                "The overlap between dataset 1 and dataset {} is {:.2}%",
                i,
                coefficient * 100.0
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(OverlapReport(lines))
}

/// Overlapping coefficient between dataset 0 and each dataset 1..n
pub fn pairwise_overlap(means: &[f64], standard_deviations: &[f64]) -> Result<Vec<f64>> {
    let dists = distributions(means, standard_deviations)?;
    let Some((first, rest)) = dists.split_first() else {
        return Ok(Vec::new());
    };
    rest.iter().map(|other| first.overlap(other)).collect()
}
