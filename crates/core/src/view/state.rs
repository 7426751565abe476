//! View state
//!
//! The three states are mutually exclusive. Every transition installs a new
//! value; a record set is never mutated in place.

use std::sync::Arc;

use driftradar_domain::MetricRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The fetch has not completed yet.
    Loading,
    /// The fetch failed; carries the user-facing message.
    Error(String),
    /// The fetch succeeded; carries the records exactly as received.
    Loaded(Arc<[MetricRecord]>),
}

impl ViewState {
    pub fn loaded(records: Vec<MetricRecord>) -> Self {
        Self::Loaded(records.into())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Records of a successful load; empty in every other state.
    pub fn records(&self) -> &[MetricRecord] {
        match self {
            Self::Loaded(records) => records.as_ref(),
            Self::Loading | Self::Error(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loaded_exposes_records() {
        assert!(ViewState::Loading.records().is_empty());
        assert!(ViewState::Error("boom".into()).records().is_empty());
        assert_eq!(ViewState::loaded(Vec::new()).records().len(), 0);
    }

    #[test]
    fn error_message_only_in_error_state() {
        assert_eq!(ViewState::Error("boom".into()).error_message(), Some("boom"));
        assert_eq!(ViewState::Loading.error_message(), None);
        assert!(ViewState::Loading.is_loading());
        assert!(!ViewState::Error("boom".into()).is_loading());
    }
}
