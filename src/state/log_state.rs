//! LogState - Log Messages with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
            LogLevel::Debug => gpui::rgba(0x6b7280ff),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// State for log messages using a ring buffer
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new log entry, evicting the oldest when full
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }
        let entry = LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Get all log entries (oldest first)
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Newest entries first, at most `limit`
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::GLOBAL_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ring_buffer_eviction() {
        let mut logs = LogState::new(3);
        for i in 1..=4 {
            logs.push(LogLevel::Info, format!("line {i}"), Local::now());
        }
        assert_eq!(logs.len(), 3);
        let messages: Vec<_> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(logs.entries().back().map(|e| e.id), Some(4));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut logs = LogState::new(10);
        logs.push(LogLevel::Info, "first", Local::now());
        logs.push(LogLevel::Warn, "second", Local::now());
        logs.push(LogLevel::Error, "third", Local::now());
        let recent: Vec<_> = logs.recent(2).map(|e| e.message.as_str()).collect();
        assert_eq!(recent, vec!["third", "second"]);
    }

    #[test]
    fn test_zero_capacity_drops_everything() {
        let mut logs = LogState::new(0);
        logs.push(LogLevel::Info, "ignored", Local::now());
        assert!(logs.is_empty());
    }
}
