//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app::navigation::ActivePage;
use crate::constants::{
    DEFAULT_ENDPOINT, HEALTH_INTERVAL_SECS, HEALTH_TIMEOUT_SECS, SUBMIT_TIMEOUT_SECS,
};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Archive API configuration
    pub api: ApiConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl AppConfig {
    /// Replace the endpoint when an override is present and non-empty
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.map(|e| e.trim().to_string()) {
            if !endpoint.is_empty() {
                self.api.endpoint = endpoint;
            }
        }
        self
    }
}

/// Archive API connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the archive service (e.g., "http://localhost:8000")
    pub endpoint: String,
    /// Timeout for a single submission
    pub submit_timeout_secs: u64,
    /// Timeout for a single health probe
    pub health_timeout_secs: u64,
    /// Interval between health probes
    pub health_interval_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            submit_timeout_secs: SUBMIT_TIMEOUT_SECS,
            health_timeout_secs: HEALTH_TIMEOUT_SECS,
            health_interval_secs: HEALTH_INTERVAL_SECS,
        }
    }
}

impl ApiConfig {
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs.max(1))
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs.max(1))
    }

    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_secs.max(1))
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Locale tag ("en", "zh-CN"); system locale when absent
    pub locale: Option<String>,
    /// Page shown at start-up
    pub start_page: ActivePage,
}
