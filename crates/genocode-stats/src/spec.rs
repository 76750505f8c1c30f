//! Per-dataset statistical description
//!
//! A [`DistributionSpec`] holds whatever a study reported for one genotype
//! group. [`DistributionSpec::resolve`] turns it into a concrete
//! [`NormalDist`].

use serde::{Deserialize, Serialize};

use crate::convert::{
    confidence_interval_to_standard_deviation, standard_error_to_standard_deviation,
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SAMPLE_SIZE,
};
use crate::error::{Result, StatsError};
use crate::normal::NormalDist;

/// Statistical description of one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub standard_deviation: Option<f64>,
    #[serde(default)]
    pub standard_error: Option<f64>,
    #[serde(default)]
    pub confidence_lower_bound: Option<f64>,
    #[serde(default)]
    pub confidence_upper_bound: Option<f64>,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl Default for DistributionSpec {
    fn default() -> Self {
        Self {
            mean: None,
            standard_deviation: None,
            standard_error: None,
            confidence_lower_bound: None,
            confidence_upper_bound: None,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl DistributionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec from a mean and standard deviation
    pub fn from_mean_sd(mean: f64, standard_deviation: f64) -> Self {
        Self::new().with_mean(mean).with_standard_deviation(standard_deviation)
    }

    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    pub fn with_standard_deviation(mut self, standard_deviation: f64) -> Self {
        self.standard_deviation = Some(standard_deviation);
        self
    }

    pub fn with_standard_error(mut self, standard_error: f64) -> Self {
        self.standard_error = Some(standard_error);
        self
    }

    pub fn with_confidence_interval(mut self, lower: f64, upper: f64) -> Self {
        self.confidence_lower_bound = Some(lower);
        self.confidence_upper_bound = Some(upper);
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Resolve to a normal distribution
    ///
    /// Precedence, last one wins: a direct standard deviation, then the
    /// confidence interval, then the standard error. A missing mean is taken
    /// from the interval midpoint when an interval is given.
    pub fn resolve(&self) -> Result<NormalDist> {
        let mut mean = self.mean;
        let mut standard_deviation = self.standard_deviation;

        if let Some(upper) = self.confidence_upper_bound {
            let lower = self.confidence_lower_bound.ok_or_else(|| {
                StatsError::MissingParameters(
                    "confidence upper bound given without a lower bound".to_string(),
                )
            })?;
            standard_deviation = Some(confidence_interval_to_standard_deviation(
                lower,
                upper,
                self.confidence_level,
                self.sample_size,
            )?);
            if mean.is_none() {
                mean = Some((upper + lower) / 2.0);
            }
        }

        if let Some(standard_error) = self.standard_error {
            standard_deviation = Some(standard_error_to_standard_deviation(
                standard_error,
                self.sample_size,
            ));
        }

        let standard_deviation = standard_deviation.ok_or_else(|| {
            StatsError::MissingParameters(
                "one of standard deviation, standard error or confidence interval is required"
                    .to_string(),
            )
        })?;
        let mean = mean.ok_or_else(|| StatsError::MissingParameters("mean is required".to_string()))?;

        NormalDist::new(mean, standard_deviation)
    }
}
