//! Integration tests for the service hub.
//!
//! The hub runs on its own tokio runtime; these tests drive it through its
//! public commands and watch the `AppEvent` stream.

use std::time::{Duration, Instant};

use archive_gui::domain::archive::{ArchiveMetadata, ArchivePayload};
use archive_gui::domain::config::AppConfig;
use archive_gui::eventing::app_event::AppEvent;
use archive_gui::services::service_hub::ServiceHub;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EVENT_WAIT: Duration = Duration::from_secs(5);

fn config_for(endpoint: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.endpoint = endpoint.to_string();
    config.api.submit_timeout_secs = 5;
    config.api.health_timeout_secs = 5;
    config.api.health_interval_secs = 3600;
    config
}

async fn mount_health(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(server)
        .await;
}

fn payload() -> ArchivePayload {
    ArchivePayload {
        number: 1.0,
        metadata: ArchiveMetadata {
            source: "sensor".into(),
            location: "lab".into(),
            unit: "V".into(),
            device_id: "DEV-1".into(),
            battery_level: None,
            calibrated: false,
            updated: false,
        },
    }
}

async fn next_event(events: &flume::Receiver<AppEvent>) -> AppEvent {
    tokio::time::timeout(EVENT_WAIT, events.recv_async())
        .await
        .expect("event in time")
        .expect("event channel open")
}

/// Wait for the next health result, collecting log lines seen on the way
async fn next_health(events: &flume::Receiver<AppEvent>, logs: &mut Vec<String>) -> (String, bool) {
    loop {
        match next_event(events).await {
            AppEvent::ConnectionChanged {
                endpoint, online, ..
            } => return (endpoint, online),
            AppEvent::Log { message, .. } => logs.push(message),
            _ => {}
        }
    }
}

#[tokio::test]
async fn submission_not_held_behind_slow_health_check() {
    let server = MockServer::start().await;
    mount_health(&server, Duration::from_millis(2500)).await;
    Mock::given(method("POST"))
        .and(path("/api/archives"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "arc-9" })))
        .expect(1)
        .mount(&server)
        .await;

    let (event_tx, events) = flume::unbounded();
    let hub = ServiceHub::new(config_for(&server.uri()), event_tx);
    let started = Instant::now();
    hub.check_health().expect("health command");
    hub.submit_archive("req-1".into(), payload())
        .expect("submit command");

    loop {
        if let AppEvent::ArchiveSubmitted {
            request_id,
            outcome,
        } = next_event(&events).await
        {
            assert_eq!(request_id, "req-1");
            assert!(outcome.is_ok());
            break;
        }
    }
    assert!(started.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn repeated_status_logged_once() {
    let server = MockServer::start().await;
    mount_health(&server, Duration::ZERO).await;

    let (event_tx, events) = flume::unbounded();
    let hub = ServiceHub::new(config_for(&server.uri()), event_tx);
    let mut logs = Vec::new();

    let (_, online) = next_health(&events, &mut logs).await;
    assert!(online);
    hub.check_health().expect("health command");
    let (_, online) = next_health(&events, &mut logs).await;
    assert!(online);

    let status_logs = logs.iter().filter(|m| m.contains("is online")).count();
    assert_eq!(status_logs, 1);
}

#[tokio::test]
async fn endpoint_change_reprobes_new_endpoint() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mount_health(&first, Duration::ZERO).await;
    mount_health(&second, Duration::ZERO).await;

    let (event_tx, events) = flume::unbounded();
    let hub = ServiceHub::new(config_for(&first.uri()), event_tx);
    let mut logs = Vec::new();
    let (endpoint, _) = next_health(&events, &mut logs).await;
    assert_eq!(endpoint, first.uri());

    hub.update_config(config_for(&second.uri()))
        .expect("config command");

    let mut config_loaded = false;
    logs.clear();
    loop {
        match next_event(&events).await {
            AppEvent::ConfigLoaded { config } => {
                assert_eq!(config.api.endpoint, second.uri());
                config_loaded = true;
            }
            AppEvent::ConnectionChanged {
                endpoint, online, ..
            } => {
                assert!(config_loaded);
                assert_eq!(endpoint, second.uri());
                assert!(online);
                break;
            }
            AppEvent::Log { message, .. } => logs.push(message),
            _ => {}
        }
    }
    let expected = format!("{} is online", second.uri());
    assert!(logs.iter().any(|m| m == &expected));
}

#[tokio::test]
async fn late_result_for_replaced_endpoint_dropped() {
    let slow = MockServer::start().await;
    mount_health(&slow, Duration::from_millis(1500)).await;

    let (event_tx, events) = flume::unbounded();
    let hub = ServiceHub::new(config_for(&slow.uri()), event_tx);

    let mut unreachable = config_for("http://127.0.0.1:9");
    unreachable.api.health_timeout_secs = 1;
    hub.update_config(unreachable).expect("config command");

    let deadline = Instant::now() + Duration::from_secs(3);
    let mut reports = 0;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Ok(received) = tokio::time::timeout(remaining, events.recv_async()).await else {
            break;
        };
        if let Ok(AppEvent::ConnectionChanged {
            endpoint, online, ..
        }) = received
        {
            assert_eq!(endpoint, "http://127.0.0.1:9");
            assert!(!online);
            reports += 1;
        }
    }
    assert!(reports >= 1);
}
