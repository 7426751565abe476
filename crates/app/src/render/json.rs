//! JSON rendering for downstream tools

use driftradar_core::{Dashboard, ViewState};
use driftradar_domain::SeriesDescriptor;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonView<'a> {
    Loading,
    Error { message: &'a str },
    Loaded(Dashboard),
}

pub fn render(state: &ViewState, descriptors: &[SeriesDescriptor]) -> serde_json::Result<String> {
    let view = match state {
        ViewState::Loading => JsonView::Loading,
        ViewState::Error(message) => JsonView::Error { message },
        ViewState::Loaded(records) => JsonView::Loaded(Dashboard::from_records(records, descriptors)),
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use driftradar_domain::default_series;
    use serde_json::{json, Value};

    use super::super::fixtures::scenario;
    use super::*;

    fn parse(state: &ViewState) -> Value {
        serde_json::from_str(&render(state, &default_series()).unwrap()).unwrap()
    }

    #[test]
    fn loaded_dashboard_is_tagged_and_gap_filled() {
        let value = parse(&ViewState::loaded(scenario()));

        assert_eq!(value["status"], "loaded");
        assert_eq!(value["chart"]["labels"], json!([1, 2]));
        assert_eq!(value["chart"]["series"][0]["label"], "MonthlyCharges Drift Score");
        assert_eq!(value["chart"]["series"][0]["scores"], json!([0.12, 0.31]));
        assert_eq!(value["chart"]["series"][1]["points"], json!([0.05, null]));
        assert_eq!(value["alerts"][0]["batch_id"], 2);
    }

    #[test]
    fn transient_states_are_tagged() {
        assert_eq!(parse(&ViewState::Loading), json!({ "status": "loading" }));
        assert_eq!(
            parse(&ViewState::Error("down".into())),
            json!({ "status": "error", "message": "down" })
        );
    }
}
