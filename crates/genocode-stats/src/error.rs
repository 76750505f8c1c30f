//! Error types for genocode-stats

use thiserror::Error;

/// Error type for statistical helper operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Confidence level is not one of the tabulated values
    #[error("Invalid confidence level: {0} (expected one of 99.9, 99.5, 99.0, 95.0, 90.0, 85.0, 80.0)")]
    InvalidConfidenceLevel(f64),

    /// No standard deviation (or mean) could be resolved
    #[error("Missing parameters: {0}")]
    MissingParameters(String),

    /// Dataset count could not be inferred from the inputs
    #[error("Cannot infer dataset count: provide means or upper confidence bounds as a non-empty sequence")]
    AmbiguousInputShape,

    /// A parallel input sequence has the wrong length
    #[error("Length mismatch for '{field}': expected {expected}, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A parameter value is unusable
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Bin edges are not a strictly increasing sequence of at least two values
    #[error("Invalid bin edges: {0}")]
    InvalidBinEdges(String),
}

impl StatsError {
    pub(crate) fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        StatsError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Prefix an `InvalidParameter` name with the dataset it came from
    pub(crate) fn in_dataset(self, index: usize) -> Self {
        match self {
            StatsError::InvalidParameter { name, reason } => StatsError::InvalidParameter {
                name: format!("datasets[{}].{}", index, name),
                reason,
            },
            other => other,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StatsError>;
