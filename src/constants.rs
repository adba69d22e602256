//! UI and Service Constants
//!
//! Centralized constants for layout, buffers and network timing.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Log panel heights
pub const LOG_PANEL_EXPANDED_HEIGHT: f32 = 150.0;
pub const LOG_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Ring buffer capacity of the in-app log panel
pub const GLOBAL_LOG_CAPACITY: usize = 2000;

/// Number of log lines rendered when the panel is expanded
pub const LOG_PANEL_VISIBLE_LINES: usize = 50;

/// Number of submissions kept in the archive history
pub const SUBMISSION_HISTORY_CAPACITY: usize = 20;

/// How long a notification stays on screen
pub const NOTIFICATION_DURATION_MS: u64 = 4000;

/// Archive endpoint defaults
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const SUBMIT_TIMEOUT_SECS: u64 = 10;
pub const HEALTH_TIMEOUT_SECS: u64 = 3;
pub const HEALTH_INTERVAL_SECS: u64 = 15;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "ARCHIVE_GUI_ENDPOINT";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Prefix of the rolling log file
pub const LOG_FILE_PREFIX: &str = "archive-gui.log";
