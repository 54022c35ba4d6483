// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::VerificationStatus;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// INPUT STAGE EVENTS
// ============================================================================

/// Emitted when a file reference is accepted from the picker or a drop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAccepted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub file_name: String,
    pub file_path: PathBuf,
    pub replaced_previous: bool,
}

impl FileAccepted {
    pub fn new(
        session_id: Uuid,
        file_name: String,
        file_path: PathBuf,
        replaced_previous: bool,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            file_name,
            file_path,
            replaced_previous,
        }
    }
}

impl_domain_event!(FileAccepted);

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// Emitted when submit is attempted with no usable input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub reason: String,
}

impl ValidationFailed {
    pub fn new(session_id: Uuid, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            reason,
        }
    }
}

impl_domain_event!(ValidationFailed);

/// Emitted when the session enters the submitting phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub input_summary: String,
}

impl VerificationStarted {
    pub fn new(session_id: Uuid, input_summary: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            input_summary,
        }
    }
}

impl_domain_event!(VerificationStarted);

/// Emitted when the scoring engine resolved and the result is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub score: u8,
    pub status: VerificationStatus,
}

impl VerificationCompleted {
    pub fn new(session_id: Uuid, score: u8, status: VerificationStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            score,
            status,
        }
    }
}

impl_domain_event!(VerificationCompleted);

/// Emitted when the scoring engine failed and the session went back to idle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub error: String,
}

impl VerificationFailed {
    pub fn new(session_id: Uuid, error: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            error,
        }
    }
}

impl_domain_event!(VerificationFailed);

// ============================================================================
// RESULT VIEW EVENTS
// ============================================================================

/// Emitted when a result is dismissed and the input stage shows again
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
}

impl SessionReset {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
        }
    }
}

impl_domain_event!(SessionReset);

/// Emitted after a report file is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub report_id: Uuid,
    pub report_path: PathBuf,
}

impl ReportExported {
    pub fn new(report_id: Uuid, report_path: PathBuf) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            report_id,
            report_path,
        }
    }
}

impl_domain_event!(ReportExported);
