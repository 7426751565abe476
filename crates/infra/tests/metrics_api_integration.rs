//! End-to-end load cycle against a mock backend
//!
//! Wires the real `MetricsApiClient` into `MetricsView` and drives it with
//! `wiremock` responses covering each failure mode of the backend.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use driftradar_core::{Dashboard, MetricsSource, MetricsView};
use driftradar_domain::{default_series, DriftRadarError};
use driftradar_infra::{MetricsApiClient, MetricsApiConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FAILURE: &str = "Failed to fetch data. Please ensure the FastAPI backend is running.";

fn client(base_url: String) -> MetricsApiClient {
    MetricsApiClient::new(MetricsApiConfig {
        base_url,
        timeout: Duration::from_millis(300),
        user_agent: None,
        system_proxy: false,
    })
    .expect("metrics client")
}

fn view_for(base_url: String) -> MetricsView {
    MetricsView::new(Arc::new(client(base_url)), "FastAPI backend")
}

fn scenario_body() -> serde_json::Value {
    json!([
        {
            "id": 1, "batch_id": 1, "timestamp": "2024-06-01T09:00:00",
            "feature_name": "MonthlyCharges", "metric_type": "data_drift_psi_num",
            "drift_score": 0.12, "is_drifted": false, "alert_message": null
        },
        {
            "id": 2, "batch_id": 2, "timestamp": "2024-06-01T09:30:00",
            "feature_name": "MonthlyCharges", "metric_type": "data_drift_psi_num",
            "drift_score": 0.31, "is_drifted": true, "alert_message": "drift detected"
        },
        {
            "id": 3, "batch_id": 1, "timestamp": "2024-06-01T09:00:00",
            "feature_name": "Contract", "metric_type": "data_drift_psi_cat",
            "drift_score": 0.05, "is_drifted": false
        }
    ])
}

async fn backend_returning(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn loads_and_projects_backend_records() {
    let server = backend_returning(ResponseTemplate::new(200).set_body_json(scenario_body())).await;

    let state = view_for(server.uri()).load().await;
    assert_eq!(state.records().len(), 3);

    let dashboard = Dashboard::from_records(state.records(), &default_series());
    assert_eq!(dashboard.chart.labels, vec![1, 2]);
    assert_eq!(dashboard.chart.series[0].scores, vec![0.12, 0.31]);
    assert_eq!(dashboard.chart.series[1].scores, vec![0.05]);
    assert_eq!(dashboard.alerts.len(), 1);
    assert_eq!(dashboard.alerts[0].alert_message.as_deref(), Some("drift detected"));
}

#[tokio::test]
async fn server_error_ends_in_error_state() {
    let server = backend_returning(ResponseTemplate::new(500)).await;

    let state = view_for(server.uri()).load().await;
    assert_eq!(state.error_message(), Some(FAILURE));
    assert!(state.records().is_empty());
}

#[tokio::test]
async fn malformed_record_fails_the_whole_load() {
    let mut body = scenario_body();
    body[2]["drift_score"] = json!("high");
    let server = backend_returning(ResponseTemplate::new(200).set_body_json(body)).await;

    let result = client(server.uri()).fetch_metrics().await;
    assert!(matches!(result, Err(DriftRadarError::InvalidPayload(_))));
}

#[tokio::test]
async fn non_json_body_ends_in_error_state() {
    let server =
        backend_returning(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let state = view_for(server.uri()).load().await;
    assert_eq!(state.error_message(), Some(FAILURE));
}

#[tokio::test]
async fn slow_backend_times_out_into_error_state() {
    let server = backend_returning(
        ResponseTemplate::new(200)
            .set_body_json(scenario_body())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let state = view_for(server.uri()).load().await;
    assert_eq!(state.error_message(), Some(FAILURE));
}

#[tokio::test]
async fn unreachable_backend_ends_in_error_state() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = view_for(format!("http://{addr}")).load().await;
    assert_eq!(state.error_message(), Some(FAILURE));
    assert!(!state.is_loading());
}
