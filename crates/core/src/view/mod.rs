//! Metrics view: one fetch, one explicit state value

pub mod ports;
pub mod service;
pub mod state;

pub use service::MetricsView;
pub use state::ViewState;
