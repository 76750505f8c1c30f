//! Page routing
//!
//! Maps a URL path to one of the dashboard pages. Unknown paths land on
//! the main page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dashboard page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Landing page
    Main,
    /// Consent form
    Consent,
    /// Genotype statistics and charts
    Statistic,
    /// Data upload
    Load,
}

impl Page {
    /// All pages, in navigation order
    pub const ALL: [Page; 4] = [Page::Main, Page::Consent, Page::Statistic, Page::Load];

    /// Select the page for a URL path
    pub fn from_path(path: &str) -> Self {
        match path {
            "/consent" => Page::Consent,
            "/statistic" => Page::Statistic,
            "/load" => Page::Load,
            _ => Page::Main,
        }
    }

    /// Canonical path for this page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Main => "/",
            Page::Consent => "/consent",
            Page::Statistic => "/statistic",
            Page::Load => "/load",
        }
    }

    /// Get a human-readable title for this page
    pub fn title(&self) -> &'static str {
        match self {
            Page::Main => "Genocode",
            Page::Consent => "Consent",
            Page::Statistic => "Effect of Genotype on Phenotype",
            Page::Load => "Load Data",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Page::from_path("/consent"), Page::Consent);
        assert_eq!(Page::from_path("/statistic"), Page::Statistic);
        assert_eq!(Page::from_path("/load"), Page::Load);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_main() {
        assert_eq!(Page::from_path("/"), Page::Main);
        assert_eq!(Page::from_path(""), Page::Main);
        assert_eq!(Page::from_path("/statistics"), Page::Main);
        assert_eq!(Page::from_path("/Consent"), Page::Main);
    }

    #[test]
    fn test_path_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
