//! Application context - dependency wiring and the run cycle

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use driftradar_core::{MetricsSource, MetricsView, ViewState};
use driftradar_domain::{Config, Result};
use driftradar_infra::{MetricsApiClient, MetricsApiConfig};
use tracing::{info, warn};

use crate::render;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were loaded and rendered.
    Loaded,
    /// The fetch failed; the error banner was rendered.
    Failed,
    /// The view was torn down before the fetch finished; nothing rendered.
    Interrupted,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Loaded => 0,
            Self::Failed => 1,
            Self::Interrupted => 130,
        }
    }
}

/// Owns the configuration and the mounted view for one run.
pub struct AppContext {
    pub config: Config,
    pub view: Arc<MetricsView>,
}

impl AppContext {
    /// Wire the HTTP metrics client into a fresh view.
    ///
    /// # Errors
    /// Returns `DriftRadarError::Config` when the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = MetricsApiClient::new(MetricsApiConfig::from(&config.api))?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Use any metrics source (tests, alternative backends).
    pub fn with_source(config: Config, source: Arc<dyn MetricsSource>) -> Self {
        let view = Arc::new(MetricsView::new(source, &config.dashboard.backend_label));
        Self { config, view }
    }

    /// Load once, render, write the output, tear the view down.
    ///
    /// Ctrl-C while the fetch is in flight tears the view down early.
    pub async fn run(&self) -> anyhow::Result<RunOutcome> {
        let interrupt = tokio::spawn({
            let view = Arc::clone(&self.view);
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("interrupted; tearing down metrics view");
                    view.teardown();
                }
            }
        });

        let state = self.view.load().await;
        interrupt.abort();

        if !self.view.is_mounted() {
            return Ok(RunOutcome::Interrupted);
        }

        let outcome = self.render_and_write(&state)?;
        self.view.teardown();
        Ok(outcome)
    }

    fn render_and_write(&self, state: &ViewState) -> anyhow::Result<RunOutcome> {
        let output = &self.config.output;
        let rendered = render::render(state, &self.config.dashboard.series, output.format)?;

        match output.path.as_deref() {
            Some(path) => {
                write_file(Path::new(path), &rendered)?;
                info!(path, format = %output.format, "dashboard written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes()).context("Failed to write to stdout")?;
                stdout.flush().context("Failed to flush stdout")?;
            }
        }

        Ok(match state {
            ViewState::Loaded(_) => RunOutcome::Loaded,
            ViewState::Error(_) | ViewState::Loading => RunOutcome::Failed,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
