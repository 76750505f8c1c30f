//! Normal distribution model
//!
//! A plain (mean, standard deviation) pair with the handful of operations
//! the dashboard needs: density, cumulative probability, the overlapping
//! coefficient between two normals, and sampling from an injected RNG.

use std::f64::consts::{PI, SQRT_2};

use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal as StatsNormal};
use statrs::function::erf::erf;

use crate::error::{Result, StatsError};

/// Largest number of draws a single sample may request
pub const MAX_SAMPLE_SIZE: usize = 10_000_000;

/// Normal distribution N(mean, std_dev²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalDist {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalDist {
    /// Create a distribution, rejecting non-finite parameters and negative sigma
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(StatsError::invalid_parameter("mean", "must be finite"));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(StatsError::invalid_parameter(
                "standard_deviation",
                format!("must be finite and non-negative, got {}", std_dev),
            ));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Probability density at `x`
    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x, self.mean, self.std_dev)
    }

    /// Cumulative probability at `x`
    ///
    /// A zero-sigma distribution is a point mass at the mean.
    pub fn cdf(&self, x: f64) -> f64 {
        match StatsNormal::new(self.mean, self.std_dev) {
            Ok(normal) => normal.cdf(x),
            Err(_) if x < self.mean => 0.0,
            Err(_) => 1.0,
        }
    }

    /// Overlapping coefficient: the area shared by both density curves
    ///
    /// Returns a value in [0, 1]. The densities cross at most twice; the
    /// shared area follows from the CDFs at those crossings.
    pub fn overlap(&self, other: &NormalDist) -> Result<f64> {
        let (x, y) = if (other.std_dev, other.mean) < (self.std_dev, self.mean) {
            (other, self)
        } else {
            (self, other)
        };

        let x_var = x.variance();
        let y_var = y.variance();
        if x_var == 0.0 || y_var == 0.0 {
            return Err(StatsError::invalid_parameter(
                "standard_deviation",
                "overlap is undefined when sigma is zero",
            ));
        }

        let dv = y_var - x_var;
        let dm = (y.mean - x.mean).abs();
        if dv == 0.0 {
            return Ok(1.0 - erf(dm / (2.0 * x.std_dev * SQRT_2)));
        }

        let a = x.mean * y_var - y.mean * x_var;
        let b = x.std_dev * y.std_dev * (dm * dm + dv * (y_var / x_var).ln()).sqrt();
        let x1 = (a + b) / dv;
        let x2 = (a - b) / dv;

        Ok(1.0 - ((y.cdf(x1) - x.cdf(x1)).abs() + (y.cdf(x2) - x.cdf(x2)).abs()))
    }

    /// Draw `size` independent samples
    pub fn sample<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Vec<f64>> {
        if size > MAX_SAMPLE_SIZE {
            return Err(StatsError::invalid_parameter(
                "sample_size",
                format!("{} exceeds the maximum of {}", size, MAX_SAMPLE_SIZE),
            ));
        }
        let normal = rand_distr::Normal::new(self.mean, self.std_dev)
            .map_err(|e| StatsError::invalid_parameter("standard_deviation", e.to_string()))?;

        // from_fn has no lower size hint, so the buffer grows with the draws
        Ok(std::iter::from_fn(|| Some(normal.sample(rng))).take(size).collect())
    }
}

/// Normal probability density, `1/(sd*sqrt(2π)) * exp(-(x-mean)²/(2sd²))`
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = x - mean;
    1.0 / (std_dev * (2.0 * PI).sqrt()) * (-(z * z) / (2.0 * std_dev * std_dev)).exp()
}
