//! Sample summaries for violin plots
//!
//! Provides per-sample statistics used to draw one violin per genotype:
//! - Mean, sample standard deviation
//! - Five-number summary (min, quartiles, max)
//! - A Gaussian kernel density profile for the violin outline

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Number of KDE evaluation points per violin
pub const DEFAULT_VIOLIN_POINTS: usize = 100;

/// Summary statistics for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN/infinite values skipped
    pub missing: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl SampleSummary {
    /// Summarize a sample; `None` if it has no finite values
    pub fn from_sample(data: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            missing: data.len() - count,
            mean,
            std_dev,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Linear-interpolated quantile of sorted, non-empty data
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Violin outline: kernel density sampled between the sample's min and max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolinProfile {
    pub positions: Vec<f64>,
    pub density: Vec<f64>,
    /// Kernel standard deviation (Scott's rule)
    pub bandwidth: f64,
    pub summary: SampleSummary,
}

impl ViolinProfile {
    /// Build a profile with `points` evaluation positions
    ///
    /// Returns `None` for samples with fewer than two finite values or no
    /// spread, where a kernel estimate is undefined.
    pub fn from_sample(data: &[f64], points: usize) -> Option<Self> {
        let summary = SampleSummary::from_sample(data)?;
        if summary.count < 2 || summary.std_dev == 0.0 || points < 2 {
            return None;
        }

        let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let n = finite.len() as f64;
        let bandwidth = summary.std_dev * n.powf(-0.2);
        let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());

        let step = summary.range() / (points - 1) as f64;
        let positions: Vec<f64> = (0..points).map(|i| summary.min + i as f64 * step).collect();
        let density = positions
            .iter()
            .map(|&x| {
                let sum: f64 = finite
                    .iter()
                    .map(|&xi| {
                        let z = (x - xi) / bandwidth;
                        (-0.5 * z * z).exp()
                    })
                    .sum();
                sum * norm
            })
            .collect();

        Some(Self {
            positions,
            density,
            bandwidth,
            summary,
        })
    }
}
