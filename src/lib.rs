// src/lib.rs
// CertiCheck - Internship certificate verification desk
//
// Architecture:
// - Domain-centric: session state machine and result types live in `domain`
// - Event-driven: the service emits facts, notifications are derived from them
// - Pluggable scoring: engines sit behind `ScoringEngine`
// - Application layer: UI boundary (Tauri commands behind the `desktop` feature)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_session,
    validate_verification_result,
    // Presentation
    CheckIndicator,
    CheckMark,
    ExtractedInfo,
    // Session
    FileReference,
    InfoField,
    InputMode,
    Phase,
    ResultView,
    ScoreBand,
    SubmittedInput,
    VerificationChecks,
    // Verification result
    VerificationResult,
    VerificationSession,
    VerificationStatus,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::VerifierConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, register_notification_handlers, DomainEvent, EventBus, EventLogEntry,
    FileAccepted, ReportExported, SessionReset, ValidationFailed, VerificationCompleted,
    VerificationFailed, VerificationStarted,
};

// ============================================================================
// PUBLIC API - Infrastructure & Integrations
// ============================================================================

pub use infrastructure::{
    Notification, NotificationLog, NotificationSink, ReportDocument, ReportStore, Severity,
};
pub use integrations::{canned_records, CannedScoringEngine, ScoringEngine};

// ============================================================================
// PUBLIC API - Services & Application
// ============================================================================

pub use application::AppState;
pub use services::{SelectFileRequest, VerificationService};
