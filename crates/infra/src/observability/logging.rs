//! Structured logging setup

use driftradar_domain::{DriftRadarError, LogFormat, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, otherwise from the configured level.
///
/// # Errors
/// Returns `DriftRadarError::Config` when neither source yields a valid
/// directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        DriftRadarError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Install the global subscriber.
///
/// # Errors
/// Fails on an invalid filter or when a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    installed.map_err(|e| DriftRadarError::Internal(format!("Failed to install logger: {}", e)))
}
