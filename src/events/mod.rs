// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported.

pub mod bus;
pub mod handlers;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Input stage
    FileAccepted,
    // Export
    ReportExported,
    // Result view
    SessionReset,
    // Submission
    ValidationFailed,
    VerificationCompleted,
    VerificationFailed,
    VerificationStarted,
};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};

pub use handlers::register_notification_handlers;

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
