// src/domain/mod.rs
//
// Domain Root
//
// Declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod result_view;
pub mod session;
pub mod verification;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Verification result
pub use verification::{
    validate_verification_result, ExtractedInfo, VerificationChecks, VerificationResult,
    VerificationStatus, MAX_SCORE,
};

// Session
pub use session::{
    validate_session, validate_transition, FileReference, InputMode, Phase, SubmittedInput,
    VerificationSession, SUGGESTED_EXTENSIONS,
};

// Presentation
pub use result_view::{CheckIndicator, CheckMark, InfoField, ResultView, ScoreBand};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
