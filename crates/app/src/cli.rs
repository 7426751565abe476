//! Command-line interface

use std::path::PathBuf;

use clap::Parser;
use driftradar_domain::{Config, LogFormat, OutputFormat, Result};
use driftradar_infra::config;

/// Fetch drift metrics once and render the dashboard.
#[derive(Debug, Parser)]
#[command(name = "driftradar", version, about)]
pub struct Cli {
    /// Config file (TOML or JSON); probed in standard locations when omitted
    #[arg(short, long, env = "DRIFTRADAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format: text, html or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the rendered dashboard to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Overlay command-line flags onto a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.display().to_string());
        }
        if self.log_json {
            config.logging.format = LogFormat::Json;
        }
    }

    /// Full configuration: file and environment via the loader, then flags.
    ///
    /// # Errors
    /// Returns `DriftRadarError::Config` for unreadable files, bad values, or
    /// a flag combination that fails validation.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = config::load_unvalidated(self.config.clone())?;
        self.apply(&mut config);
        config::validate(&config)?;
        Ok(config)
    }
}
