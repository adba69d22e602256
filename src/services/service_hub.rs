//! ServiceHub - Background Service Management
//!
//! Owns the archive client and the health monitor. The UI sends
//! `ServiceCommand`s; results come back as `AppEvent`s.

use std::sync::Arc;

use chrono::Local;
use gpui::Global;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::archive::{ArchivePayload, SubmitError};
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::services::archive_client::ArchiveClient;
use crate::services::runtime::{spawn_in_tokio, spawn_named_in_tokio};

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// POST one archive
    SubmitArchive {
        request_id: String,
        payload: ArchivePayload,
    },
    /// Probe the health endpoint now
    CheckHealth,
    /// Apply a new configuration (endpoint, timeouts)
    UpdateConfig(AppConfig),
}

/// Client plus the probe bookkeeping tied to it
#[derive(Default)]
struct ClientSlot {
    endpoint: String,
    client: Option<ArchiveClient>,
    /// Bumped on every `apply`; probes started before that are stale
    generation: u64,
    last_online: Option<bool>,
}

/// Shared between the command handler and the health monitor
struct Shared {
    config: RwLock<AppConfig>,
    slot: RwLock<ClientSlot>,
}

impl Shared {
    fn new(config: AppConfig) -> Self {
        Self {
            config: RwLock::new(config),
            slot: RwLock::new(ClientSlot::default()),
        }
    }

    fn client(&self) -> Option<ArchiveClient> {
        self.slot.read().client.clone()
    }

    /// Generation, configured endpoint and client for a probe about to start
    fn snapshot(&self) -> (u64, String, Option<ArchiveClient>) {
        let slot = self.slot.read();
        (slot.generation, slot.endpoint.clone(), slot.client.clone())
    }

    /// Record a probe result. `None` when the config changed while it ran,
    /// otherwise whether the online status changed.
    fn record(&self, generation: u64, online: bool) -> Option<bool> {
        let mut slot = self.slot.write();
        if slot.generation != generation {
            return None;
        }
        let changed = slot.last_online != Some(online);
        slot.last_online = Some(online);
        Some(changed)
    }

    /// Rebuild the client from config. Returns the error message if it cannot be built.
    fn apply(&self, config: AppConfig) -> Option<String> {
        let built = ArchiveClient::new(&config.api);
        let endpoint = config.api.endpoint.clone();
        *self.config.write() = config;

        let mut slot = self.slot.write();
        slot.generation += 1;
        slot.endpoint = endpoint;
        slot.last_online = None;
        match built {
            Ok(client) => {
                slot.client = Some(client);
                None
            }
            Err(err) => {
                slot.client = None;
                Some(err.to_string())
            }
        }
    }
}

/// ServiceHub manages all background services
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
    shared: Arc<Shared>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its background tasks
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let shared = Arc::new(Shared::new(config.clone()));

        if let Some(err) = shared.apply(config) {
            error!("Failed to build HTTP client: {}", err);
            let _ = event_tx.send(AppEvent::error(format!("HTTP client unavailable: {err}")));
        }

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            shared: shared.clone(),
        };

        hub.start_command_handler(command_rx, shared.clone(), event_tx.clone());
        hub.start_health_monitor(shared, event_tx);

        let _ = hub.event_tx.send(AppEvent::info("ServiceHub initialized"));
        hub
    }

    /// Start the command handler task
    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<ServiceCommand>,
        shared: Arc<Shared>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        spawn_named_in_tokio("service-commands", async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                match cmd {
                    ServiceCommand::SubmitArchive {
                        request_id,
                        payload,
                    } => {
                        let Some(client) = shared.client() else {
                            let _ = event_tx.send(AppEvent::ArchiveSubmitted {
                                request_id,
                                outcome: Err(SubmitError::Network {
                                    message: "HTTP client unavailable".to_string(),
                                }),
                            });
                            continue;
                        };

                        // Submissions and probes each get their own task so neither waits on the other
                        let event_tx = event_tx.clone();
                        spawn_in_tokio(async move {
                            info!(%request_id, url = %client.archives_url(), "Submitting archive");
                            let outcome = client.submit(&payload).await;
                            match &outcome {
                                Ok(created) => {
                                    info!(%request_id, id = %created.id, "Archive created")
                                }
                                Err(err) => warn!(%request_id, "Archive submission failed: {}", err),
                            }
                            let _ = event_tx.send(AppEvent::ArchiveSubmitted {
                                request_id,
                                outcome,
                            });
                        });
                    }
                    ServiceCommand::CheckHealth => {
                        spawn_probe(&shared, &event_tx);
                    }
                    ServiceCommand::UpdateConfig(new_config) => {
                        let endpoint = new_config.api.endpoint.clone();
                        match shared.apply(new_config.clone()) {
                            None => {
                                let _ = event_tx.send(AppEvent::info(format!(
                                    "Endpoint set to {endpoint}"
                                )));
                            }
                            Some(err) => {
                                let _ = event_tx.send(AppEvent::error(format!(
                                    "HTTP client unavailable: {err}"
                                )));
                            }
                        }
                        let _ = event_tx.send(AppEvent::ConfigLoaded { config: new_config });
                        spawn_probe(&shared, &event_tx);
                    }
                }
            }
        });
    }

    /// Probe at start-up and then every `health_interval_secs`
    fn start_health_monitor(&self, shared: Arc<Shared>, event_tx: flume::Sender<AppEvent>) {
        spawn_named_in_tokio("health-monitor", async move {
            loop {
                probe_health(&shared, &event_tx).await;
                let interval = shared.config.read().api.health_interval();
                tokio::time::sleep(interval).await;
                if event_tx.is_disconnected() {
                    break;
                }
            }
        });
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) -> Result<()> {
        self.command_tx
            .send(cmd)
            .map_err(|err| Error::ChannelSend {
                message: err.to_string(),
            })
    }

    /// Submit one archive
    pub fn submit_archive(&self, request_id: String, payload: ArchivePayload) -> Result<()> {
        self.send(ServiceCommand::SubmitArchive {
            request_id,
            payload,
        })
    }

    /// Probe the endpoint now
    pub fn check_health(&self) -> Result<()> {
        self.send(ServiceCommand::CheckHealth)
    }

    /// Update configuration
    pub fn update_config(&self, config: AppConfig) -> Result<()> {
        self.send(ServiceCommand::UpdateConfig(config))
    }

    /// Get current config
    pub fn config(&self) -> AppConfig {
        self.shared.config.read().clone()
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Run one probe in its own task
fn spawn_probe(shared: &Arc<Shared>, event_tx: &flume::Sender<AppEvent>) {
    let shared = shared.clone();
    let event_tx = event_tx.clone();
    spawn_in_tokio(async move {
        probe_health(&shared, &event_tx).await;
    });
}

/// Run one probe and report it; log only when the status changes.
/// Results for an endpoint that was replaced mid-probe are dropped.
async fn probe_health(shared: &Shared, event_tx: &flume::Sender<AppEvent>) {
    let (generation, endpoint, client) = shared.snapshot();
    let Some(client) = client else {
        if shared.record(generation, false).is_some() {
            let _ = event_tx.send(AppEvent::ConnectionChanged {
                endpoint,
                online: false,
                detail: Some("HTTP client unavailable".to_string()),
                checked_at: Local::now(),
            });
        }
        return;
    };

    let report = client.check_health().await;
    let Some(changed) = shared.record(generation, report.online) else {
        debug!(%endpoint, "Dropping health result for a replaced endpoint");
        return;
    };

    if changed {
        let message = if report.online {
            format!("{} is online", client.endpoint())
        } else {
            format!(
                "{} is offline ({})",
                client.endpoint(),
                report.detail.as_deref().unwrap_or("unreachable")
            )
        };
        info!("{}", message);
        let _ = event_tx.send(if report.online {
            AppEvent::info(message)
        } else {
            AppEvent::warn(message)
        });
    }

    let _ = event_tx.send(AppEvent::ConnectionChanged {
        endpoint,
        online: report.online,
        detail: report.detail,
        checked_at: Local::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_unreachable_endpoint_reported_offline() {
        let (event_tx, event_rx) = flume::unbounded();
        let mut config = AppConfig::default();
        config.api.endpoint = "http://127.0.0.1:9".to_string();
        config.api.health_timeout_secs = 1;
        let _hub = ServiceHub::new(config, event_tx);

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match event_rx.recv_deadline(deadline) {
                Ok(AppEvent::ConnectionChanged { online, detail, .. }) => {
                    assert!(!online);
                    assert!(detail.is_some());
                    break;
                }
                Ok(_) => continue,
                Err(err) => panic!("no health report: {err}"),
            }
        }
    }

    #[test]
    fn test_stale_health_result_dropped() {
        let shared = Shared::new(AppConfig::default());
        shared.apply(AppConfig::default());
        let (before, _, _) = shared.snapshot();

        let mut config = AppConfig::default();
        config.api.endpoint = "http://127.0.0.1:9".to_string();
        shared.apply(config);
        let (after, endpoint, client) = shared.snapshot();

        assert_ne!(before, after);
        assert_eq!(endpoint, "http://127.0.0.1:9");
        assert!(client.is_some());
        assert_eq!(shared.record(before, true), None);
        assert_eq!(shared.record(after, false), Some(true));
        assert_eq!(shared.record(after, false), Some(false));
        assert_eq!(shared.record(after, true), Some(true));
    }
}
