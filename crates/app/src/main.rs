//! DriftRadar - drift monitoring dashboard
//!
//! Fetches the backend's metrics once and renders the dashboard.

#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use driftradar_app::{AppContext, Cli};
use driftradar_infra::observability;

const CONFIG_ERROR_EXIT: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("driftradar: {err}");
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    if let Err(err) = observability::init(&config.logging) {
        eprintln!("driftradar: {err}");
        return ExitCode::from(CONFIG_ERROR_EXIT);
    }

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }
    tracing::info!(base_url = %config.api.base_url, format = %config.output.format, "DriftRadar starting");

    let context = match AppContext::new(config) {
        Ok(context) => context,
        Err(err) => {
            tracing::error!(error = %err, "failed to initialise");
            eprintln!("driftradar: {err}");
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    match context.run().await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            eprintln!("driftradar: {err:#}");
            ExitCode::FAILURE
        }
    }
}
