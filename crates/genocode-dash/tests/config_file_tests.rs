//! Configuration file loading and end-to-end page rendering

use std::io::Write;

use genocode_dash::{AppContext, DashError, DashboardConfig, PageContent};
use tempfile::NamedTempFile;

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_file() {
    let file = write_config(
        ".toml",
        r#"
labels = ["TT", "AT", "AA"]
seed = 3

[datasets]
upper_bounds = [24.9, 25.2, 25.6]
lower_bounds = [23.3, 23.6, 24.0]
confidence_level = 99.0
sample_size = 400
"#,
    );

    let config = DashboardConfig::load(file.path()).unwrap();
    assert_eq!(config.datasets.sample_size, 400);
    assert_eq!(config.bins, Default::default());

    let ctx = AppContext::new(config).unwrap();
    match ctx.render("/statistic").unwrap() {
        PageContent::Statistic { analysis, .. } => {
            assert_eq!(analysis.datasets.len(), 3);
            assert!(analysis.datasets.iter().all(|d| d.sample_size == 400));
            // Interval midpoints become the means
            assert!((analysis.datasets[0].distribution.mean - 24.1).abs() < 1e-9);
        }
        other => panic!("unexpected page {:?}", other.page()),
    }
}

#[test]
fn test_load_json_file() {
    let file = write_config(
        ".json",
        r#"{"datasets": {"means": [20, 22], "standard_errors": ["0.1", "0.2"]}, "labels": []}"#,
    );

    let config = DashboardConfig::load(file.path()).unwrap();
    let view = AppContext::new(config).unwrap().analyze().unwrap();
    assert_eq!(view.datasets.len(), 2);
    assert_eq!(view.datasets[1].label, "Dataset 2");
    // 0.2 * sqrt(1000)
    assert!((view.datasets[1].distribution.std_dev - 0.2 * 1000f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_load_rejects_invalid_config() {
    let file = write_config(
        ".toml",
        r#"
[datasets]
standard_deviations = [1.0, 2.0]
"#,
    );

    let err = DashboardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::Stats(_)));
}

#[test]
fn test_load_missing_file() {
    let err = DashboardConfig::load("/nonexistent/genocode.toml").unwrap_err();
    assert!(matches!(err, DashError::Io(_)));
}

#[test]
fn test_load_malformed_toml() {
    let file = write_config(".toml", "labels = [");
    let err = DashboardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::Toml(_)));
}

#[test]
fn test_load_two_datasets_without_labels() {
    let file = write_config(
        ".toml",
        r#"
seed = 11

[datasets]
means = [21.5, 23.0]
standard_deviations = [2.0, 2.5]
"#,
    );

    let config = DashboardConfig::load(file.path()).unwrap();
    assert!(config.labels.is_empty());

    let view = AppContext::new(config).unwrap().analyze().unwrap();
    let labels: Vec<&str> = view.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["Dataset 1", "Dataset 2"]);
}

#[test]
fn test_load_rejects_oversized_sample() {
    let file = write_config(
        ".toml",
        r#"
[datasets]
means = [21.5, 23.0]
standard_deviations = [2.0, 2.5]
sample_size = 9223372036854775807
"#,
    );

    let err = DashboardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, DashError::Config(_)));
}
