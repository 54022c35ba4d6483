// src/infrastructure/notifications.rs
//
// Notification Sink
//
// The toast area of the UI. Receives {title, description, severity}
// triples; what it does with them is up to the implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            created_at: Utc::now(),
        }
    }
}

/// Consumer of user-visible notifications
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub const NOTIFICATION_LOG_CAPACITY: usize = 100;

/// In-memory sink. Keeps the most recent notifications until drained;
/// the oldest is dropped once `capacity` is reached.
#[derive(Debug)]
pub struct NotificationLog {
    entries: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::with_capacity(NOTIFICATION_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Take all pending notifications, leaving the log empty
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn count_with(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        log::info!(
            "[NOTIFY] {:?}: {} - {}",
            notification.severity,
            notification.title,
            notification.description
        );
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(notification);
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_order_and_drains() {
        let log = NotificationLog::new();
        log.notify(Notification::new("first", "a", Severity::Info));
        log.notify(Notification::new("second", "b", Severity::Warning));

        assert_eq!(log.count_with(Severity::Warning), 1);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].title, "second");
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn test_log_drops_oldest_past_capacity() {
        let log = NotificationLog::with_capacity(3);
        for n in 0..5 {
            log.notify(Notification::new(format!("n{}", n), "", Severity::Info));
        }

        let titles: Vec<String> = log.snapshot().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
