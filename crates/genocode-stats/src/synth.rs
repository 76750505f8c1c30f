//! Sample synthesis
//!
//! Draws normal samples from resolved [`DistributionSpec`]s, either one at a
//! time or for a whole collection of comparable datasets (the genotype
//! groups of one study). The random source is always passed in, so tests
//! and reproducible dashboards can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::convert::{coerce_parameters, NumericInput, DEFAULT_CONFIDENCE_LEVEL};
use crate::error::{Result, StatsError};
use crate::spec::DistributionSpec;

/// Sample size used by [`CompoundInput`] unless overridden
pub const DEFAULT_COMPOUND_SAMPLE_SIZE: usize = 1000;

/// Seeded generator for reproducible synthesis
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Random draws for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynthesizedSample(Vec<f64>);

impl SynthesizedSample {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for SynthesizedSample {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl AsRef<[f64]> for SynthesizedSample {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Resolve a spec and draw `spec.sample_size` values from it
pub fn synthesize<R: Rng + ?Sized>(spec: &DistributionSpec, rng: &mut R) -> Result<SynthesizedSample> {
    let dist = spec.resolve()?;
    tracing::debug!(
        mean = dist.mean,
        std_dev = dist.std_dev,
        size = spec.sample_size,
        "synthesizing normal sample"
    );
    Ok(SynthesizedSample(dist.sample(spec.sample_size, rng)?))
}

/// Parallel per-dataset inputs for a collection of datasets
///
/// Each field holds one entry per dataset. Entries may be missing and may
/// be integers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    #[serde(default)]
    pub means: Option<Vec<Option<NumericInput>>>,
    #[serde(default)]
    pub standard_deviations: Option<Vec<Option<NumericInput>>>,
    #[serde(default)]
    pub standard_errors: Option<Vec<Option<NumericInput>>>,
    #[serde(default)]
    pub upper_bounds: Option<Vec<Option<NumericInput>>>,
    #[serde(default)]
    pub lower_bounds: Option<Vec<Option<NumericInput>>>,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

fn default_sample_size() -> usize {
    DEFAULT_COMPOUND_SAMPLE_SIZE
}

impl Default for CompoundInput {
    fn default() -> Self {
        Self {
            means: None,
            standard_deviations: None,
            standard_errors: None,
            upper_bounds: None,
            lower_bounds: None,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            sample_size: DEFAULT_COMPOUND_SAMPLE_SIZE,
        }
    }
}

fn wrap(values: &[f64]) -> Option<Vec<Option<NumericInput>>> {
    Some(values.iter().map(|&v| Some(NumericInput::Float(v))).collect())
}

impl CompoundInput {
    /// Datasets given as means and standard deviations
    pub fn from_means_and_deviations(means: &[f64], standard_deviations: &[f64]) -> Self {
        Self {
            means: wrap(means),
            standard_deviations: wrap(standard_deviations),
            ..Self::default()
        }
    }

    /// Datasets given as means and standard errors
    pub fn from_means_and_errors(means: &[f64], standard_errors: &[f64]) -> Self {
        Self {
            means: wrap(means),
            standard_errors: wrap(standard_errors),
            ..Self::default()
        }
    }

    /// Datasets given as confidence intervals
    pub fn from_confidence_intervals(lower_bounds: &[f64], upper_bounds: &[f64]) -> Self {
        Self {
            upper_bounds: wrap(upper_bounds),
            lower_bounds: wrap(lower_bounds),
            ..Self::default()
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Number of datasets, taken from the means or else the upper bounds
    pub fn dataset_count(&self) -> Result<usize> {
        let count = match (&self.means, &self.upper_bounds) {
            (Some(means), _) => means.len(),
            (None, Some(upper)) => upper.len(),
            (None, None) => return Err(StatsError::AmbiguousInputShape),
        };
        if count == 0 {
            return Err(StatsError::AmbiguousInputShape);
        }
        Ok(count)
    }

    /// Build one [`DistributionSpec`] per dataset
    ///
    /// With means present, confidence bounds are ignored and standard
    /// deviations win over standard errors. Without means, datasets come
    /// from the confidence intervals alone.
    pub fn to_specs(&self) -> Result<Vec<DistributionSpec>> {
        let count = self.dataset_count()?;

        let (means, sds, ses, upper, lower) = if self.means.is_some() {
            let (sds, ses) = if self.standard_deviations.is_some() {
                (self.standard_deviations.as_deref(), None)
            } else {
                (None, self.standard_errors.as_deref())
            };
            (self.means.as_deref(), sds, ses, None, None)
        } else {
            (
                None,
                None,
                None,
                self.upper_bounds.as_deref(),
                self.lower_bounds.as_deref(),
            )
        };

        check_len("means", means, count)?;
        check_len("standard_deviations", sds, count)?;
        check_len("standard_errors", ses, count)?;
        check_len("upper_bounds", upper, count)?;
        check_len("lower_bounds", lower, count)?;

        (0..count)
            .map(|i| {
                let params = coerce_parameters(
                    entry(means, i),
                    entry(sds, i),
                    entry(ses, i),
                    entry(upper, i),
                    entry(lower, i),
                )
                .map_err(|e| e.in_dataset(i))?;
                Ok(DistributionSpec {
                    mean: params.mean,
                    standard_deviation: params.standard_deviation,
                    standard_error: params.standard_error,
                    confidence_lower_bound: params.lower_bound,
                    confidence_upper_bound: params.upper_bound,
                    confidence_level: self.confidence_level,
                    sample_size: self.sample_size,
                })
            })
            .collect()
    }
}

fn check_len(field: &'static str, values: Option<&[Option<NumericInput>]>, expected: usize) -> Result<()> {
    match values {
        Some(v) if v.len() != expected => Err(StatsError::LengthMismatch {
            field,
            expected,
            actual: v.len(),
        }),
        _ => Ok(()),
    }
}

fn entry(values: Option<&[Option<NumericInput>]>, index: usize) -> Option<&NumericInput> {
    values.and_then(|v| v[index].as_ref())
}

/// Synthesize one sample per dataset, in dataset order
pub fn synthesize_all<R: Rng + ?Sized>(input: &CompoundInput, rng: &mut R) -> Result<Vec<SynthesizedSample>> {
    let specs = input.to_specs()?;
    tracing::debug!(datasets = specs.len(), size = input.sample_size, "synthesizing datasets");
    specs.iter().map(|spec| synthesize(spec, rng)).collect()
}
