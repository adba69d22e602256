//! ArchiveClient - HTTP Access to the Archive Endpoint
//!
//! One POST per submission, one GET per health probe. Nothing is retried.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::archive::{ArchiveCreated, ArchivePayload, SubmitError};
use crate::domain::config::ApiConfig;
use crate::error::Result;

/// Result of a health probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub online: bool,
    /// Failure reason when offline
    pub detail: Option<String>,
}

/// Client for `POST /api/archives` and `GET /health`
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: Client,
    endpoint: String,
    submit_timeout: Duration,
    health_timeout: Duration,
}

impl ArchiveClient {
    /// Build a client for the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("archive-gui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim().trim_end_matches('/').to_string(),
            submit_timeout: config.submit_timeout(),
            health_timeout: config.health_timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn archives_url(&self) -> String {
        format!("{}/api/archives", self.endpoint)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.endpoint)
    }

    /// Send one submission and classify the response
    pub async fn submit(
        &self,
        payload: &ArchivePayload,
    ) -> std::result::Result<ArchiveCreated, SubmitError> {
        let url = self.archives_url();
        debug!(%url, "POST archive");

        let response = self
            .http
            .post(&url)
            .timeout(self.submit_timeout)
            .json(payload)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;

        if status.is_success() {
            ArchiveCreated::from_body(&body).ok_or_else(|| SubmitError::MalformedResponse {
                message: format!("HTTP {} without an id", status.as_u16()),
            })
        } else {
            warn!(status = status.as_u16(), "archive submission rejected");
            Err(SubmitError::from_status(status.as_u16(), &body))
        }
    }

    /// Probe `GET /health`. Any 2xx means online.
    pub async fn check_health(&self) -> HealthReport {
        let result = self
            .http
            .get(self.health_url())
            .timeout(self.health_timeout)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => HealthReport {
                online: true,
                detail: None,
            },
            Ok(response) => HealthReport {
                online: false,
                detail: Some(format!("HTTP {}", response.status().as_u16())),
            },
            Err(err) => HealthReport {
                online: false,
                detail: Some(describe_transport_error(&err)),
            },
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> SubmitError {
        if err.is_timeout() {
            SubmitError::Timeout {
                secs: self.submit_timeout.as_secs(),
            }
        } else {
            SubmitError::Network {
                message: describe_transport_error(&err),
            }
        }
    }
}

/// Short, user-facing description of a transport failure
fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else if err.is_decode() || err.is_body() {
        "could not read response".to_string()
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let config = ApiConfig {
            endpoint: " http://localhost:8000/ ".to_string(),
            ..Default::default()
        };
        let client = ArchiveClient::new(&config).expect("client");
        assert_eq!(client.endpoint(), "http://localhost:8000");
        assert_eq!(client.archives_url(), "http://localhost:8000/api/archives");
        assert_eq!(client.health_url(), "http://localhost:8000/health");
    }
}
