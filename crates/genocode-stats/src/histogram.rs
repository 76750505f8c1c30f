//! Histogram binning and density curves
//!
//! All datasets of one analysis share a single [`BinEdges`], so the
//! resulting histograms and density curves line up index for index.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::normal::normal_pdf;
use crate::synth::SynthesizedSample;

/// Strictly increasing histogram bin boundaries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BinEdges(Vec<f64>);

impl BinEdges {
    /// Validate and wrap a list of edges
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(StatsError::InvalidBinEdges(format!(
                "need at least 2 edges, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(StatsError::InvalidBinEdges(
                "edges must be finite".to_string(),
            ));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(StatsError::InvalidBinEdges(
                "edges must increase monotonically".to_string(),
            ));
        }
        Ok(Self(edges))
    }

    /// `num` evenly spaced edges from `start` to `stop`, both included
    pub fn linspace(start: f64, stop: f64, num: usize) -> Result<Self> {
        if num < 2 {
            return Err(StatsError::InvalidBinEdges(format!(
                "need at least 2 edges, got {}",
                num
            )));
        }
        let step = (stop - start) / (num - 1) as f64;
        let mut edges: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
        edges[num - 1] = stop;
        Self::new(edges)
    }

    pub fn edges(&self) -> &[f64] {
        &self.0
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a valid edge list has at least two entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bins (edges - 1)
    pub fn bin_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Midpoint of each bin
    pub fn centers(&self) -> Vec<f64> {
        self.0.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Index of the bin holding `x`, if any
    ///
    /// Bins are half-open `[e_i, e_{i+1})` except the last, which also
    /// includes its right edge.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        if x.is_nan() || x < self.first() || x > self.last() {
            return None;
        }
        if x == self.last() {
            return Some(self.bin_count() - 1);
        }
        // Number of edges <= x is at least 1 here
        Some(self.0.partition_point(|&e| e <= x) - 1)
    }
}

impl<'de> Deserialize<'de> for BinEdges {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let edges = Vec::<f64>::deserialize(deserializer)?;
        BinEdges::new(edges).map_err(serde::de::Error::custom)
    }
}

/// Bin counts for one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Number of values that landed in some bin
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Counts scaled so the histogram integrates to one over the edges
    pub fn density(&self, edges: &BinEdges) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .zip(edges.edges().windows(2))
            .map(|(&c, w)| c as f64 / (total as f64 * (w[1] - w[0])))
            .collect()
    }
}

/// Bin one set of values
pub fn histogram(values: &[f64], edges: &BinEdges) -> Histogram {
    let mut counts = vec![0u64; edges.bin_count()];
    for &x in values {
        if let Some(i) = edges.bin_index(x) {
            counts[i] += 1;
        }
    }
    Histogram { counts }
}

/// Bin every sample against the shared edges
pub fn build_histograms(samples: &[SynthesizedSample], edges: &BinEdges) -> Vec<Histogram> {
    samples.iter().map(|s| histogram(s.values(), edges)).collect()
}

/// Normal density curves evaluated at every bin edge
///
/// One curve per dataset; each curve has one value per edge.
pub fn build_pdfs(means: &[f64], standard_deviations: &[f64], edges: &BinEdges) -> Result<Vec<Vec<f64>>> {
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
        .map(|(&mean, &sd)| {
            if !sd.is_finite() || sd <= 0.0 {
                return Err(StatsError::invalid_parameter(
                    "standard_deviation",
                    format!("density needs a positive finite sigma, got {}", sd),
                ));
            }
            Ok(edges.edges().iter().map(|&x| normal_pdf(x, mean, sd)).collect())
        })
        .collect()
}
