//! Metrics view service - the single fetch-and-install cycle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use driftradar_domain::constants::fetch_failure_message;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::ports::MetricsSource;
use super::state::ViewState;

/// Owns the dashboard's record set for one mounted lifetime.
///
/// The view starts in [`ViewState::Loading`]. [`MetricsView::load`] performs
/// the one fetch and installs either `Loaded` or `Error`. After
/// [`MetricsView::teardown`] nothing mutates the state any more, including a
/// fetch that was already in flight.
pub struct MetricsView {
    source: Arc<dyn MetricsSource>,
    failure_message: String,
    state: watch::Sender<ViewState>,
    liveness: CancellationToken,
    started: AtomicBool,
}

impl MetricsView {
    /// Create a mounted view backed by `source`.
    ///
    /// `backend_label` names the backend in the failure banner.
    pub fn new(source: Arc<dyn MetricsSource>, backend_label: &str) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            source,
            failure_message: fetch_failure_message(backend_label),
            state,
            liveness: CancellationToken::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn is_mounted(&self) -> bool {
        !self.liveness.is_cancelled()
    }

    /// Fetch the record set once and install the outcome.
    ///
    /// Only the first call fetches; later calls return the current state.
    /// Returns the state as it stands when the call finishes.
    pub async fn load(&self) -> ViewState {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("metrics view already loaded; ignoring repeated load");
            return self.state();
        }
        if !self.is_mounted() {
            debug!("metrics view torn down before load");
            return self.state();
        }

        self.install(ViewState::Loading);

        let outcome = tokio::select! {
            biased;
            () = self.liveness.cancelled() => {
                debug!("metrics view torn down while fetching; discarding fetch");
                return self.state();
            }
            outcome = self.source.fetch_metrics() => outcome,
        };

        let next = match outcome {
            Ok(records) => {
                info!(records = records.len(), "metrics loaded");
                ViewState::loaded(records)
            }
            Err(err) => {
                error!(error = %err, kind = err.kind(), "failed to fetch metrics");
                ViewState::Error(self.failure_message.clone())
            }
        };

        self.install(next);
        self.state()
    }

    /// End the view's lifetime. Any in-flight fetch is abandoned.
    pub fn teardown(&self) {
        self.liveness.cancel();
    }

    fn install(&self, next: ViewState) {
        if self.is_mounted() {
            self.state.send_replace(next);
        } else {
            debug!("metrics view torn down; dropping state transition");
        }
    }
}

impl Drop for MetricsView {
    fn drop(&mut self) {
        self.liveness.cancel();
    }
}
