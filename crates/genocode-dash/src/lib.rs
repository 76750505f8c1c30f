//! genocode-dash - Dashboard layer for genotype/phenotype visualization
//!
//! Wires the statistics in `genocode-stats` to the dashboard pages:
//!
//! - **config**: dataset and chart configuration (TOML/JSON)
//! - **routing**: URL path → [`Page`]
//! - **context**: [`AppContext`], the explicit application state handed to
//!   the page server
//! - **analysis**: chart-ready [`AnalysisView`] for the statistic page

pub mod analysis;
pub mod config;
pub mod context;
pub mod error;
pub mod routing;

pub use analysis::{run_analysis, AnalysisView, DatasetView};
pub use config::{BinConfig, DashboardConfig, CONFIG_ENV_VAR};
pub use context::{AppContext, PageContent};
pub use error::{DashError, Result};
pub use routing::Page;
