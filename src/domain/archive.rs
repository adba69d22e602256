//! Archive - Submission Payload, Response and Failure Classes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::Snafu;

/// Body of `POST {endpoint}/api/archives`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivePayload {
    /// The numeric reading
    pub number: f64,
    /// Descriptive fields attached to the reading
    pub metadata: ArchiveMetadata,
}

/// Flat metadata record sent with a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveMetadata {
    pub source: String,
    pub location: String,
    pub unit: String,
    pub device_id: String,
    /// Omitted from the body when not provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    pub calibrated: bool,
    pub updated: bool,
}

/// Archive record created by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCreated {
    pub id: String,
}

impl ArchiveCreated {
    /// Extract the identifier from a success body.
    ///
    /// Accepts `{"id": "..."}` and `{"id": 42}`.
    pub fn from_body(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let id = match value.get("id")? {
            Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Some(Self { id })
    }
}

/// Display classification of a failed submission.
///
/// Nothing here is retried; each class maps to one user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum SubmitError {
    /// 400 - the server rejected the payload
    #[snafu(display("Validation failed: {message}"))]
    Validation { message: String },

    /// 403 - rejected by the server's origin policy
    #[snafu(display("Request blocked by CORS policy"))]
    Cors,

    /// 404 - archive route missing on the server
    #[snafu(display("Archive endpoint not found"))]
    NotFound,

    /// 5xx
    #[snafu(display("Server error (HTTP {status})"))]
    Server { status: u16 },

    /// Any other non-2xx status
    #[snafu(display("Unexpected response (HTTP {status})"))]
    UnexpectedStatus { status: u16 },

    /// 2xx without a usable identifier
    #[snafu(display("Malformed response: {message}"))]
    MalformedResponse { message: String },

    /// No response within the submission timeout
    #[snafu(display("Request timed out after {secs}s"))]
    Timeout { secs: u64 },

    /// Connection refused, DNS failure, reset, ...
    #[snafu(display("Network error: {message}"))]
    Network { message: String },
}

impl SubmitError {
    /// Classify a non-2xx status. `body` is searched for a server message.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            400 => SubmitError::Validation {
                message: server_message(body).unwrap_or_else(|| "bad request".to_string()),
            },
            403 => SubmitError::Cors,
            404 => SubmitError::NotFound,
            500..=599 => SubmitError::Server { status },
            _ => SubmitError::UnexpectedStatus { status },
        }
    }

    /// Translation key for the notification title
    pub fn message_key(&self) -> &'static str {
        match self {
            SubmitError::Validation { .. } => "error-validation",
            SubmitError::Cors => "error-cors",
            SubmitError::NotFound => "error-not-found",
            SubmitError::Server { .. } => "error-server",
            SubmitError::UnexpectedStatus { .. } => "error-unexpected-status",
            SubmitError::MalformedResponse { .. } => "error-malformed",
            SubmitError::Timeout { .. } => "error-timeout",
            SubmitError::Network { .. } => "error-network",
        }
    }

    /// Extra detail appended to the translated message, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            SubmitError::Validation { message }
            | SubmitError::MalformedResponse { message }
            | SubmitError::Network { message } => Some(message.clone()),
            SubmitError::Server { status } | SubmitError::UnexpectedStatus { status } => {
                Some(format!("HTTP {status}"))
            }
            SubmitError::Timeout { secs } => Some(format!("{secs}s")),
            SubmitError::Cors | SubmitError::NotFound => None,
        }
    }
}

/// Pull `message` or `error` out of a JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(battery_level: Option<f64>) -> ArchivePayload {
        ArchivePayload {
            number: 21.5,
            metadata: ArchiveMetadata {
                source: "sensor".into(),
                location: "lab-2".into(),
                unit: "C".into(),
                device_id: "DEV-001".into(),
                battery_level,
                calibrated: true,
                updated: false,
            },
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let value = serde_json::to_value(payload(Some(87.0))).expect("serialize");
        assert_eq!(
            value,
            json!({
                "number": 21.5,
                "metadata": {
                    "source": "sensor",
                    "location": "lab-2",
                    "unit": "C",
                    "device_id": "DEV-001",
                    "battery_level": 87.0,
                    "calibrated": true,
                    "updated": false
                }
            })
        );
    }

    #[test]
    fn test_payload_omits_missing_battery_level() {
        let value = serde_json::to_value(payload(None)).expect("serialize");
        assert!(value["metadata"].get("battery_level").is_none());
        assert_eq!(value["metadata"]["calibrated"], json!(true));
    }

    #[test]
    fn test_created_from_body() {
        assert_eq!(
            ArchiveCreated::from_body(r#"{"id":"a1b2"}"#),
            Some(ArchiveCreated { id: "a1b2".into() })
        );
        assert_eq!(
            ArchiveCreated::from_body(r#"{"id":42,"number":1.0}"#),
            Some(ArchiveCreated { id: "42".into() })
        );
        assert_eq!(ArchiveCreated::from_body(r#"{"id":""}"#), None);
        assert_eq!(ArchiveCreated::from_body(r#"{"name":"x"}"#), None);
        assert_eq!(ArchiveCreated::from_body("not json"), None);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            SubmitError::from_status(400, r#"{"message":"number is required"}"#),
            SubmitError::Validation {
                message: "number is required".into()
            }
        );
        assert_eq!(
            SubmitError::from_status(400, ""),
            SubmitError::Validation {
                message: "bad request".into()
            }
        );
        assert_eq!(SubmitError::from_status(403, ""), SubmitError::Cors);
        assert_eq!(SubmitError::from_status(404, ""), SubmitError::NotFound);
        assert_eq!(
            SubmitError::from_status(500, ""),
            SubmitError::Server { status: 500 }
        );
        assert_eq!(
            SubmitError::from_status(503, ""),
            SubmitError::Server { status: 503 }
        );
        assert_eq!(
            SubmitError::from_status(409, ""),
            SubmitError::UnexpectedStatus { status: 409 }
        );
    }

    #[test]
    fn test_each_class_has_distinct_message_key() {
        let errors = [
            SubmitError::Validation { message: String::new() },
            SubmitError::Cors,
            SubmitError::NotFound,
            SubmitError::Server { status: 500 },
            SubmitError::UnexpectedStatus { status: 418 },
            SubmitError::MalformedResponse { message: String::new() },
            SubmitError::Timeout { secs: 10 },
            SubmitError::Network { message: String::new() },
        ];
        let mut keys: Vec<_> = errors.iter().map(SubmitError::message_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), errors.len());
    }
}
