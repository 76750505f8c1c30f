//! Application context
//!
//! Holds the validated configuration and renders pages on request. Created
//! once at startup and handed to whatever serves the pages; there is no
//! global application object.

use genocode_stats::{entropy_rng, seeded_rng};
use serde::{Deserialize, Serialize};

use crate::analysis::{run_analysis, AnalysisView};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::routing::Page;

/// Content of a rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageContent {
    Main { title: String },
    Consent { title: String },
    Load { title: String },
    Statistic { title: String, analysis: AnalysisView },
}

impl PageContent {
    pub fn page(&self) -> Page {
        match self {
            PageContent::Main { .. } => Page::Main,
            PageContent::Consent { .. } => Page::Consent,
            PageContent::Load { .. } => Page::Load,
            PageContent::Statistic { .. } => Page::Statistic,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Shared application context
#[derive(Debug, Clone)]
pub struct AppContext {
    config: DashboardConfig,
}

impl AppContext {
    /// Create a context, validating the configuration
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create from the environment-selected configuration
    pub fn from_env() -> Result<Self> {
        Self::new(DashboardConfig::from_env()?)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render the page for a URL path
    pub fn render(&self, path: &str) -> Result<PageContent> {
        let page = Page::from_path(path);
        tracing::info!("Rendering {} for path {:?}", page, path);

        let title = page.title().to_string();
        Ok(match page {
            Page::Main => PageContent::Main { title },
            Page::Consent => PageContent::Consent { title },
            Page::Load => PageContent::Load { title },
            Page::Statistic => PageContent::Statistic {
                title,
                analysis: self.analyze()?,
            },
        })
    }

    /// Run the analysis with the configured seed, or fresh entropy
    pub fn analyze(&self) -> Result<AnalysisView> {
        match self.config.seed {
            Some(seed) => run_analysis(&self.config, &mut seeded_rng(seed)),
            None => run_analysis(&self.config, &mut entropy_rng()),
        }
    }
}
