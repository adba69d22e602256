//! ConnectionState - Online/Offline Status of the Archive Endpoint

use chrono::{DateTime, Local};

/// Result of the most recent health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// No probe has completed yet
    #[default]
    Unknown,
    Online,
    Offline,
}

impl HealthStatus {
    pub fn from_online(online: bool) -> Self {
        if online {
            HealthStatus::Online
        } else {
            HealthStatus::Offline
        }
    }

    /// Translation key for the indicator label
    pub fn label_key(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "status-checking",
            HealthStatus::Online => "status-online",
            HealthStatus::Offline => "status-offline",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "◌",
            HealthStatus::Online => "●",
            HealthStatus::Offline => "○",
        }
    }
}

/// State for the endpoint connection
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    status: HealthStatus,
    detail: Option<String>,
    last_checked: Option<DateTime<Local>>,
}

impl ConnectionState {
    /// Record a probe result
    pub fn set_status(&mut self, online: bool, detail: Option<String>, at: DateTime<Local>) {
        self.status = HealthStatus::from_online(online);
        self.detail = detail;
        self.last_checked = Some(at);
    }

    /// Forget the last result (endpoint changed)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn is_online(&self) -> bool {
        self.status == HealthStatus::Online
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn last_checked(&self) -> Option<DateTime<Local>> {
        self.last_checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        let mut conn = ConnectionState::default();
        assert_eq!(conn.status(), HealthStatus::Unknown);
        assert!(conn.last_checked().is_none());

        conn.set_status(true, None, Local::now());
        assert!(conn.is_online());

        conn.set_status(false, Some("connection refused".into()), Local::now());
        assert_eq!(conn.status(), HealthStatus::Offline);
        assert_eq!(conn.detail(), Some("connection refused"));

        conn.reset();
        assert_eq!(conn.status(), HealthStatus::Unknown);
        assert!(conn.detail().is_none());
    }
}
