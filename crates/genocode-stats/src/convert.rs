//! Conversions between statistical summary representations
//!
//! Published genotype studies report spread in different ways:
//! - standard error of the mean
//! - a confidence interval at some confidence level
//! - the standard deviation itself
//!
//! Everything here reduces those to a standard deviation, and normalizes
//! loosely typed inputs (integers, numeric strings) to `f64`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Confidence level assumed when none is given
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 95.0;

/// Sample size assumed by the single-dataset conversions
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Two-sided z-scores by confidence level.
///
/// 99.5/99.0 and 90.0/85.0 share values; kept as tabulated.
const Z_SCORES: [(f64, f64); 7] = [
    (99.9, 3.291),
    (99.5, 2.807),
    (99.0, 2.807),
    (95.0, 1.960),
    (90.0, 1.645),
    (85.0, 1.645),
    (80.0, 1.282),
];

/// Confidence levels accepted by [`z_score`]
pub fn supported_confidence_levels() -> impl Iterator<Item = f64> {
    Z_SCORES.iter().map(|&(level, _)| level)
}

/// Look up the z-score for a confidence level (in percent)
pub fn z_score(confidence_level: f64) -> Result<f64> {
    Z_SCORES
        .iter()
        .find(|&&(level, _)| level == confidence_level)
        .map(|&(_, z)| z)
        .ok_or(StatsError::InvalidConfidenceLevel(confidence_level))
}

/// Convert a standard error to a standard deviation
pub fn standard_error_to_standard_deviation(standard_error: f64, sample_size: usize) -> f64 {
    standard_error * (sample_size as f64).sqrt()
}

/// Convert a confidence interval to a standard deviation
///
/// `sd = sqrt(n) * (upper - lower) / z`, where `z` comes from the fixed
/// confidence-level table.
pub fn confidence_interval_to_standard_deviation(
    lower: f64,
    upper: f64,
    confidence_level: f64,
    sample_size: usize,
) -> Result<f64> {
    let z = z_score(confidence_level)?;
    Ok((sample_size as f64).sqrt() * (upper - lower) / z)
}

/// A loosely typed numeric input, as it arrives from forms or config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Int(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl NumericInput {
    /// Convert to `f64`, parsing text if necessary
    pub fn to_f64(&self) -> Result<f64> {
        self.to_f64_named("value")
    }

    /// Like [`to_f64`](Self::to_f64), reporting failures against `name`
    pub fn to_f64_named(&self, name: &str) -> Result<f64> {
        match self {
            NumericInput::Int(v) => Ok(*v as f64),
            NumericInput::Float(v) => Ok(*v),
            NumericInput::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                StatsError::invalid_parameter(name, format!("'{}' is not a number", s))
            }),
        }
    }
}

/// Coerce an optional loosely typed value to an optional float
///
/// Absence passes through unchanged.
pub fn coerce_to_float(value: Option<&NumericInput>) -> Result<Option<f64>> {
    coerce_named(value, "value")
}

fn coerce_named(value: Option<&NumericInput>, name: &str) -> Result<Option<f64>> {
    value.map(|v| v.to_f64_named(name)).transpose()
}

/// The five per-dataset parameters after coercion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoercedParameters {
    pub mean: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub standard_error: Option<f64>,
    pub upper_bound: Option<f64>,
    pub lower_bound: Option<f64>,
}

/// Coerce each of the five dataset parameters independently
pub fn coerce_parameters(
    mean: Option<&NumericInput>,
    standard_deviation: Option<&NumericInput>,
    standard_error: Option<&NumericInput>,
    upper_bound: Option<&NumericInput>,
    lower_bound: Option<&NumericInput>,
) -> Result<CoercedParameters> {
    Ok(CoercedParameters {
        mean: coerce_named(mean, "mean")?,
        standard_deviation: coerce_named(standard_deviation, "standard_deviation")?,
        standard_error: coerce_named(standard_error, "standard_error")?,
        upper_bound: coerce_named(upper_bound, "upper_bound")?,
        lower_bound: coerce_named(lower_bound, "lower_bound")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_se_to_sd() {
        let sd = standard_error_to_standard_deviation(0.5, 100);
        assert!((sd - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_ci_to_sd_default_level() {
        let sd = confidence_interval_to_standard_deviation(
            0.2,
            0.4,
            DEFAULT_CONFIDENCE_LEVEL,
            DEFAULT_SAMPLE_SIZE,
        )
        .unwrap();
        // 10 * 0.2 / 1.96
        assert!((sd - 2.0 / 1.96).abs() < 1e-12);
    }

    #[test]
    fn test_ci_to_sd_all_levels() {
        for level in supported_confidence_levels() {
            let sd = confidence_interval_to_standard_deviation(1.0, 2.0, level, 25).unwrap();
            assert!(sd.is_finite() && sd > 0.0);
        }
    }

    #[test]
    fn test_duplicate_z_scores_preserved() {
        assert_eq!(z_score(99.5).unwrap(), z_score(99.0).unwrap());
        assert_eq!(z_score(90.0).unwrap(), z_score(85.0).unwrap());
    }

    #[test]
    fn test_invalid_confidence_level() {
        let err = confidence_interval_to_standard_deviation(0.2, 0.4, 97.5, 100).unwrap_err();
        assert_eq!(err, StatsError::InvalidConfidenceLevel(97.5));
    }

    #[test]
    fn test_coerce_variants() {
        assert_eq!(coerce_to_float(Some(&NumericInput::Int(3))).unwrap(), Some(3.0));
        assert_eq!(coerce_to_float(Some(&NumericInput::Float(2.5))).unwrap(), Some(2.5));
        assert_eq!(coerce_to_float(Some(&" 24.12 ".into())).unwrap(), Some(24.12));
        assert_eq!(coerce_to_float(None).unwrap(), None);
    }

    #[test]
    fn test_coerce_rejects_garbage() {
        let err = coerce_to_float(Some(&"abc".into())).unwrap_err();
        assert!(matches!(err, StatsError::InvalidParameter { .. }));
    }

    #[test]
    fn test_coerce_idempotent() {
        let once = coerce_to_float(Some(&NumericInput::Float(3.87))).unwrap().unwrap();
        let twice = coerce_to_float(Some(&NumericInput::Float(once))).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_coerce_parameters() {
        let mean = NumericInput::from("24");
        let sd = NumericInput::Int(4);
        let params = coerce_parameters(Some(&mean), Some(&sd), None, None, None).unwrap();
        assert_eq!(params.mean, Some(24.0));
        assert_eq!(params.standard_deviation, Some(4.0));
        assert_eq!(params.standard_error, None);
    }

    #[test]
    fn test_coerce_parameters_names_bad_field() {
        let bad = NumericInput::from("n/a");
        let err = coerce_parameters(None, None, Some(&bad), None, None).unwrap_err();
        match err {
            StatsError::InvalidParameter { name, reason } => {
                assert_eq!(name, "standard_error");
                assert!(reason.contains("n/a"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_numeric_input_untagged_json() {
        let values: Vec<NumericInput> = serde_json::from_str(r#"[1, 2.5, "3.5"]"#).unwrap();
        assert_eq!(values[0], NumericInput::Int(1));
        assert_eq!(values[1], NumericInput::Float(2.5));
        assert_eq!(values[2], NumericInput::Text("3.5".to_string()));
    }
}
