//! Logging setup.
//!
//! The sample must stay silent on every path, so the filter defaults to `off`.
//! Set `NPD_FIXTURE_LOG` (e.g. `debug`) to trace a run on stderr.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "NPD_FIXTURE_LOG";

const DEFAULT_DIRECTIVE: &str = "off";

/// Build a filter from a directive, falling back to `off` when absent or invalid.
pub fn filter_for(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber, writing to stderr.
pub fn init() -> Result<()> {
    let directive = std::env::var(LOG_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter_for(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
