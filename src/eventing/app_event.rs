//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::config::AppConfig;
use crate::state::archive_state::SubmitOutcome;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Health probe finished
    ConnectionChanged {
        /// Endpoint the probe ran against, as configured
        endpoint: String,
        online: bool,
        detail: Option<String>,
        checked_at: DateTime<Local>,
    },

    /// Configuration applied by the service layer
    ConfigLoaded { config: AppConfig },

    /// Archive submission settled
    ArchiveSubmitted {
        request_id: String,
        outcome: SubmitOutcome,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
