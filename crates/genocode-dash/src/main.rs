//! Genocode Dashboard Binary
//!
//! Renders one dashboard page as JSON for the charting front end.
//! Usage: `genocode-dash [PATH]` (default `/statistic`); set
//! `GENOCODE_CONFIG` to a TOML or JSON configuration file.

use genocode_dash::AppContext;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/statistic".to_string());

    let context = AppContext::from_env()?;
    let content = context.render(&path)?;
    println!("{}", content.to_json()?);

    Ok(())
}
