//! Configuration for genocode-dash
//!
//! Describes which datasets the statistic page analyzes and how the charts
//! are binned. Loaded from TOML or JSON; the defaults reproduce the BMI
//! example for the three genotypes of one SNP.

use std::path::Path;

use genocode_stats::{BinEdges, CompoundInput, DEFAULT_VIOLIN_POINTS, MAX_SAMPLE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "GENOCODE_CONFIG";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Per-genotype statistical inputs
    pub datasets: CompoundInput,
    /// Display label per dataset, in dataset order; empty unless given
    #[serde(default)]
    pub labels: Vec<String>,
    /// Shared histogram bins
    pub bins: BinConfig,
    /// KDE evaluation points per violin
    pub violin_points: usize,
    /// Fixed RNG seed; fresh entropy per render when absent
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            datasets: CompoundInput::from_means_and_deviations(
                &[24.12, 24.43, 24.82],
                &[3.87, 3.94, 3.95],
            ),
            labels: vec!["TT".to_string(), "AT".to_string(), "AA".to_string()],
            bins: BinConfig::default(),
            violin_points: DEFAULT_VIOLIN_POINTS,
            seed: None,
        }
    }
}

/// Evenly spaced bin edges, `count` edges from `start` to `stop`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinConfig {
    pub start: f64,
    pub stop: f64,
    pub count: usize,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            start: 10.0,
            stop: 40.0,
            count: 30,
        }
    }
}

impl BinConfig {
    pub fn edges(&self) -> Result<BinEdges> {
        Ok(BinEdges::linspace(self.start, self.stop, self.count)?)
    }
}

impl DashboardConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file; `.json` files are read as
    /// JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            _ => Self::from_toml(&contents)?,
        };
        config.validate()?;
        tracing::info!("Loaded dashboard configuration from {:?}", path);
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(path),
            Err(_) => {
                tracing::debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let count = self.datasets.dataset_count()?;

        if !self.labels.is_empty() && self.labels.len() != count {
            return Err(DashError::Config(format!(
                "{} labels given for {} datasets",
                self.labels.len(),
                count
            )));
        }

        let sample_size = self.datasets.sample_size;
        if sample_size == 0 || sample_size > MAX_SAMPLE_SIZE {
            return Err(DashError::Config(format!(
                "sample_size must be between 1 and {}, got {}",
                MAX_SAMPLE_SIZE, sample_size
            )));
        }

        if self.violin_points < 2 {
            return Err(DashError::Config(
                "violin_points must be at least 2".to_string(),
            ));
        }

        self.bins.edges()?;
        genocode_stats::z_score(self.datasets.confidence_level)?;

        Ok(())
    }

    /// Label for dataset `index`, falling back to its 1-based number
    pub fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Dataset {}", index + 1))
    }
}
