//! Chart-ready analysis of the configured genotype datasets
//!
//! Produces everything the statistic page plots: overlapping histograms,
//! normal density curves, one violin per genotype, and the overlap report.
//! Rendering is left to the charting front end.

use genocode_stats::{
    build_histograms, build_pdfs, estimate_overlap, pairwise_overlap, BinEdges, Histogram,
    NormalDist, OverlapReport, SynthesizedSample, ViolinProfile,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::error::Result;

/// Plot data for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetView {
    pub label: String,
    /// Resolved normal parameters
    pub distribution: NormalDist,
    pub sample_size: usize,
    pub histogram: Histogram,
    /// Density at each bin edge
    pub pdf: Vec<f64>,
    /// Absent when the sample is too small or has no spread
    pub violin: Option<ViolinProfile>,
}

/// Plot data for the statistic page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    pub bin_edges: BinEdges,
    pub bin_centers: Vec<f64>,
    pub datasets: Vec<DatasetView>,
    pub overlap: OverlapReport,
    /// Overlapping coefficient of dataset 0 with each later dataset
    pub pairwise_overlap: Vec<f64>,
}

impl AnalysisView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full analysis for a configuration
pub fn run_analysis<R: Rng + ?Sized>(config: &DashboardConfig, rng: &mut R) -> Result<AnalysisView> {
    let specs = config.datasets.to_specs()?;
    let distributions = specs
        .iter()
        .map(|spec| spec.resolve())
        .collect::<genocode_stats::Result<Vec<_>>>()?;
    let samples = distributions
        .iter()
        .zip(&specs)
        .map(|(dist, spec)| dist.sample(spec.sample_size, rng).map(SynthesizedSample::from))
        .collect::<genocode_stats::Result<Vec<_>>>()?;

    let edges = config.bins.edges()?;
    let histograms = build_histograms(&samples, &edges);

    let means: Vec<f64> = distributions.iter().map(|d| d.mean).collect();
    let std_devs: Vec<f64> = distributions.iter().map(|d| d.std_dev).collect();
    let pdfs = build_pdfs(&means, &std_devs, &edges)?;
    let overlap = estimate_overlap(&means, &std_devs)?;
    let pairwise = pairwise_overlap(&means, &std_devs)?;

    let datasets: Vec<DatasetView> = distributions
        .into_iter()
        .zip(samples)
        .zip(histograms)
        .zip(pdfs)
        .enumerate()
        .map(|(i, (((distribution, sample), histogram), pdf))| {
            let violin = ViolinProfile::from_sample(sample.values(), config.violin_points);
            if violin.is_none() {
                tracing::warn!("No violin profile for dataset {}: sample has no spread", i);
            }
            DatasetView {
                label: config.label(i),
                distribution,
                sample_size: sample.len(),
                histogram,
                pdf,
                violin,
            }
        })
        .collect();

    tracing::info!(
        datasets = datasets.len(),
        bins = edges.bin_count(),
        "analysis complete"
    );

    Ok(AnalysisView {
        bin_centers: edges.centers(),
        bin_edges: edges,
        datasets,
        overlap,
        pairwise_overlap: pairwise,
    })
}
