//! GopherTales startup check entry point.

use std::error::Error;
use std::sync::Arc;

use gophertales_check::config::AppConfig;
use gophertales_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        data_file = %config.data_file.display(),
        strict = config.strict,
        "checking story"
    );

    let summary = gophertales_check::run(&config, Arc::new(SystemClock))?;
    tracing::info!(
        total_arcs = summary.stats.total_arcs,
        issues = summary.issue_count,
        "story check passed"
    );

    Ok(())
}
