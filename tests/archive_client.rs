//! Integration tests for the archive HTTP client.
//!
//! Each test runs against a local wiremock server and checks the request
//! shape or the failure class a response maps to.

use std::time::Duration;

use archive_gui::domain::archive::{ArchiveCreated, ArchiveMetadata, ArchivePayload, SubmitError};
use archive_gui::domain::config::ApiConfig;
use archive_gui::services::archive_client::ArchiveClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(endpoint: &str) -> ApiConfig {
    ApiConfig {
        endpoint: endpoint.to_string(),
        submit_timeout_secs: 2,
        health_timeout_secs: 1,
        ..Default::default()
    }
}

fn client_for(server: &MockServer) -> ArchiveClient {
    ArchiveClient::new(&config_for(&server.uri())).expect("client")
}

fn payload() -> ArchivePayload {
    ArchivePayload {
        number: 42.5,
        metadata: ArchiveMetadata {
            source: "thermometer".into(),
            location: "greenhouse".into(),
            unit: "C".into(),
            device_id: "DEV-042".into(),
            battery_level: Some(80.0),
            calibrated: true,
            updated: false,
        },
    }
}

async fn submit_with_status(status: u16, body: serde_json::Value) -> Result<ArchiveCreated, SubmitError> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/archives"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    client_for(&server).submit(&payload()).await
}

#[tokio::test]
async fn submit_posts_documented_json_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/archives"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "number": 42.5,
            "metadata": {
                "source": "thermometer",
                "location": "greenhouse",
                "unit": "C",
                "device_id": "DEV-042",
                "battery_level": 80.0,
                "calibrated": true,
                "updated": false
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "arc-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).submit(&payload()).await;
    assert_eq!(created, Ok(ArchiveCreated { id: "arc-1".into() }));
}

#[tokio::test]
async fn submit_accepts_numeric_id_and_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/archives"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 17 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ArchiveClient::new(&config_for(&format!("{}/", server.uri()))).expect("client");
    let created = client.submit(&payload()).await;
    assert_eq!(created, Ok(ArchiveCreated { id: "17".into() }));
}

#[tokio::test]
async fn success_without_id_is_malformed() {
    let outcome = submit_with_status(201, json!({ "status": "ok" })).await;
    assert!(matches!(outcome, Err(SubmitError::MalformedResponse { .. })));
}

#[tokio::test]
async fn bad_request_is_validation_with_server_message() {
    let outcome = submit_with_status(400, json!({ "message": "unit is required" })).await;
    assert_eq!(
        outcome,
        Err(SubmitError::Validation {
            message: "unit is required".into()
        })
    );
}

#[tokio::test]
async fn forbidden_is_cors() {
    let outcome = submit_with_status(403, json!({})).await;
    assert_eq!(outcome, Err(SubmitError::Cors));
}

#[tokio::test]
async fn missing_route_is_not_found() {
    let outcome = submit_with_status(404, json!({})).await;
    assert_eq!(outcome, Err(SubmitError::NotFound));
}

#[tokio::test]
async fn server_failure_keeps_status() {
    let outcome = submit_with_status(502, json!({ "error": "upstream" })).await;
    assert_eq!(outcome, Err(SubmitError::Server { status: 502 }));
}

#[tokio::test]
async fn other_status_is_unexpected() {
    let outcome = submit_with_status(409, json!({})).await;
    assert_eq!(outcome, Err(SubmitError::UnexpectedStatus { status: 409 }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/archives"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": "late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        submit_timeout_secs: 1,
        ..config_for(&server.uri())
    };
    let outcome = ArchiveClient::new(&config).expect("client").submit(&payload()).await;
    assert_eq!(outcome, Err(SubmitError::Timeout { secs: 1 }));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    // Take a port from a server and shut it down again
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let outcome = ArchiveClient::new(&config_for(&uri))
        .expect("client")
        .submit(&payload())
        .await;
    assert!(matches!(outcome, Err(SubmitError::Network { .. })));
}

#[tokio::test]
async fn health_online_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let report = client_for(&server).check_health().await;
    assert!(report.online);
    assert!(report.detail.is_none());
}

#[tokio::test]
async fn health_offline_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let report = client_for(&server).check_health().await;
    assert!(!report.online);
    assert_eq!(report.detail.as_deref(), Some("HTTP 503"));
}
