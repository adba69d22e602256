//! Archive Controller
//!
//! Turns form input into submissions and endpoint changes, and reports
//! settled submissions as notifications.

use gpui::{App, SharedString};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::app::entities::AppEntities;
use crate::constants::CONFIG_FILE_NAME;
use crate::domain::archive::SubmitError;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::features::archive::form::{ArchiveForm, FormErrors};
use crate::i18n::{Locale, t};
use crate::services::service_hub::ServiceHub;
use crate::state::archive_state::SubmitOutcome;
use crate::state::notification_state::{NotificationKind, push_notification};
use crate::utils::config_store;

/// What happened to a submit click
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// A request went out with this id
    Sent(String),
    /// Client-side validation failed; nothing was sent
    Invalid(FormErrors),
    /// A submission is already in flight
    Busy,
    /// The request could not be handed to the services; already settled as a
    /// network failure
    Failed(String),
}

/// Archive page controller
#[derive(Clone)]
pub struct ArchiveController {
    entities: AppEntities,
}

impl ArchiveController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn locale(&self, cx: &App) -> Locale {
        self.entities.i18n.read(cx).locale
    }

    fn log(&self, event: AppEvent, cx: &App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(event);
        }
    }

    /// Validate the form and issue at most one request
    pub fn submit(&self, form: &ArchiveForm, cx: &mut App) -> SubmitAttempt {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                warn!(fields = errors.len(), "Archive form rejected");
                let locale = self.locale(cx);
                push_notification(
                    &self.entities.notifications,
                    NotificationKind::Error,
                    t(locale, "archive-invalid-form"),
                    None,
                    cx,
                );
                return SubmitAttempt::Invalid(errors);
            }
        };

        let request_id = Uuid::new_v4().to_string();
        let started = self.entities.archive.update(cx, |archive, cx| {
            let started = archive.begin(request_id.clone(), payload.clone());
            if started {
                cx.notify();
            }
            started
        });
        if !started {
            warn!("Submission already in flight, ignoring submit");
            return SubmitAttempt::Busy;
        }

        info!(%request_id, device_id = %payload.metadata.device_id, "Archive submit requested");
        let sent = match cx.try_global::<ServiceHub>() {
            Some(hub) => hub.submit_archive(request_id.clone(), payload),
            None => Err(Error::ChannelSend {
                message: "service hub not initialized".to_string(),
            }),
        };
        let (attempt, outcome) = dispatch_result(request_id.clone(), sent);
        if let Some(outcome) = outcome {
            if let Err(err) = &outcome {
                error!(%request_id, "Submission not dispatched: {}", err);
            }
            self.settle(&request_id, outcome, cx);
        }
        attempt
    }

    /// Record a settled submission and notify the user
    pub fn settle(&self, request_id: &str, outcome: SubmitOutcome, cx: &mut App) {
        let locale = self.locale(cx);
        let (kind, title, detail) = match &outcome {
            Ok(created) => (
                NotificationKind::Success,
                t(locale, "archive-created"),
                Some(SharedString::from(format!("id: {}", created.id))),
            ),
            Err(err) => {
                let (title, detail) = describe_submit_error(locale, err);
                (NotificationKind::Error, title, detail)
            }
        };

        match &outcome {
            Ok(created) => self.log(AppEvent::info(format!("Archive created: {}", created.id)), cx),
            Err(err) => self.log(AppEvent::error(format!("Archive submission failed: {err}")), cx),
        }

        self.entities.archive.update(cx, |archive, cx| {
            if archive.finish(request_id, outcome) {
                cx.notify();
            }
        });
        push_notification(&self.entities.notifications, kind, title, detail, cx);
    }

    /// Persist a new endpoint and point the services at it.
    ///
    /// Returns the normalized endpoint, or `None` when the input is not an
    /// http(s) URL.
    pub fn save_endpoint(&self, raw: &str, cx: &mut App) -> Option<String> {
        let locale = self.locale(cx);
        let endpoint = match normalize_endpoint(raw) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                warn!("Rejected endpoint: {}", err);
                push_notification(
                    &self.entities.notifications,
                    NotificationKind::Error,
                    t(locale, "archive-endpoint-invalid"),
                    Some(SharedString::from(raw.trim().to_string())),
                    cx,
                );
                return None;
            }
        };

        let config = with_endpoint(&self.entities.config.read(cx).config, &endpoint);

        let saved = config_store::save_config(CONFIG_FILE_NAME, &config);
        self.entities.config.update(cx, |state, cx| {
            state.update_config(config.clone());
            state.save_failed = saved.is_err();
            cx.notify();
        });
        self.entities.connection.update(cx, |conn, cx| {
            conn.reset();
            cx.notify();
        });
        if let Some(hub) = cx.try_global::<ServiceHub>()
            && let Err(err) = hub.update_config(config)
        {
            error!("Endpoint not applied: {}", err);
        }

        match saved {
            Ok(()) => {
                info!(%endpoint, "Endpoint saved");
                self.log(AppEvent::info(format!("Endpoint saved: {endpoint}")), cx);
                push_notification(
                    &self.entities.notifications,
                    NotificationKind::Success,
                    t(locale, "archive-endpoint-saved"),
                    Some(SharedString::from(endpoint.clone())),
                    cx,
                );
            }
            Err(err) => {
                error!("Failed to save config: {:#}", err);
                self.log(AppEvent::error(format!("Failed to save config: {err:#}")), cx);
                push_notification(
                    &self.entities.notifications,
                    NotificationKind::Error,
                    t(locale, "archive-endpoint-save-failed"),
                    Some(SharedString::from(format!("{err:#}"))),
                    cx,
                );
            }
        }
        Some(endpoint)
    }
}

/// Translated title plus optional detail for a failed submission
pub fn describe_submit_error(
    locale: Locale,
    err: &SubmitError,
) -> (SharedString, Option<SharedString>) {
    (
        t(locale, err.message_key()),
        err.detail().map(SharedString::from),
    )
}

/// Map the dispatch result to a submit attempt, plus the outcome to settle
/// right away when nothing went out
fn dispatch_result(request_id: String, sent: Result<()>) -> (SubmitAttempt, Option<SubmitOutcome>) {
    match sent {
        Ok(()) => (SubmitAttempt::Sent(request_id), None),
        Err(err) => (
            SubmitAttempt::Failed(request_id),
            Some(Err(SubmitError::Network {
                message: err.to_string(),
            })),
        ),
    }
}

/// Copy of `config` pointing at `endpoint`; every other setting is kept
fn with_endpoint(config: &AppConfig, endpoint: &str) -> AppConfig {
    let mut config = config.clone();
    config.api.endpoint = endpoint.to_string();
    config
}

/// Trim, require an http(s) scheme and a host, drop trailing slashes
pub fn normalize_endpoint(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(Error::Invalid {
            message: format!("not an http(s) endpoint: {:?}", raw.trim()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(
            normalize_endpoint("  http://localhost:8000/ ").ok(),
            Some("http://localhost:8000".to_string())
        );
        assert_eq!(
            normalize_endpoint("https://archive.local/base//").ok(),
            Some("https://archive.local/base".to_string())
        );
        for bad in ["localhost:8000", "http://", "http://bad host", ""] {
            assert!(matches!(
                normalize_endpoint(bad),
                Err(Error::Invalid { .. })
            ));
        }
    }

    #[test]
    fn test_dispatch_failure_settles_as_network_error() {
        let (attempt, outcome) = dispatch_result("r1".into(), Ok(()));
        assert_eq!(attempt, SubmitAttempt::Sent("r1".into()));
        assert!(outcome.is_none());

        let sent = Err(Error::ChannelSend {
            message: "closed".into(),
        });
        let (attempt, outcome) = dispatch_result("r2".into(), sent);
        assert_eq!(attempt, SubmitAttempt::Failed("r2".into()));
        assert!(matches!(outcome, Some(Err(SubmitError::Network { .. }))));
    }

    #[test]
    fn test_with_endpoint_keeps_other_settings() {
        let mut current = AppConfig::default();
        current.api.submit_timeout_secs = 7;
        current.ui.locale = Some("zh-CN".into());

        let updated = with_endpoint(&current, "https://archive.local");
        assert_eq!(updated.api.endpoint, "https://archive.local");
        assert_eq!(updated.api.submit_timeout_secs, 7);
        assert_eq!(updated.ui.locale.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn test_invalid_endpoint_produces_no_config() {
        let current = AppConfig::default();
        for bad in ["ftp://archive.local", "archive.local", " "] {
            let updated = normalize_endpoint(bad).map(|endpoint| with_endpoint(&current, &endpoint));
            assert!(updated.is_err());
        }
    }

    #[test]
    fn test_describe_submit_error() {
        let (title, detail) = describe_submit_error(
            Locale::EnUS,
            &SubmitError::Validation {
                message: "number is required".into(),
            },
        );
        assert_eq!(title.as_ref(), "Validation error");
        assert_eq!(detail.as_ref().map(|d| d.as_ref()), Some("number is required"));

        let (title, detail) = describe_submit_error(Locale::EnUS, &SubmitError::NotFound);
        assert_eq!(title.as_ref(), "Archive endpoint not found");
        assert!(detail.is_none());
    }
}
