use super::entity::{Phase, VerificationSession};
use crate::domain::{DomainError, DomainResult};

/// Validates all VerificationSession invariants
pub fn validate_session(session: &VerificationSession) -> DomainResult<()> {
    validate_result_presence(session)?;
    Ok(())
}

/// A result is held exactly while the phase is ResultReady
fn validate_result_presence(session: &VerificationSession) -> DomainResult<()> {
    let ready = session.phase == Phase::ResultReady;
    if ready != session.result.is_some() {
        return Err(DomainError::InvariantViolation(format!(
            "phase {} with result {}",
            session.phase,
            if session.result.is_some() { "present" } else { "absent" }
        )));
    }
    Ok(())
}

/// Allowed phase transitions:
///
/// idle        -> submitting
/// submitting  -> result_ready
/// submitting  -> idle          (scoring failed)
/// result_ready -> idle         (reset)
pub fn validate_transition(from: Phase, to: Phase) -> DomainResult<()> {
    let allowed = matches!(
        (from, to),
        (Phase::Idle, Phase::Submitting)
            | (Phase::Submitting, Phase::ResultReady)
            | (Phase::Submitting, Phase::Idle)
            | (Phase::ResultReady, Phase::Idle)
    );

    if !allowed {
        return Err(DomainError::InvalidStateTransition(format!(
            "{} -> {}",
            from, to
        )));
    }
    Ok(())
}
