// src/services/verification_service.rs
//
// Verification Service - Session Orchestration
//
// Owns the one VerificationSession of a mounted view and drives it through
// idle -> submitting -> result_ready -> idle.
//
// RULES:
// - The session lock is never held across an await
// - The phase flips to submitting before the engine is awaited, so a second
//   submit sees it and is rejected without reaching the engine
// - Every user-visible outcome is an event; notifications are derived from
//   events by the notification handler

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{
    validate_session, validate_verification_result, FileReference, InputMode, Phase, ResultView,
    VerificationResult, VerificationSession,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, FileAccepted, ReportExported, SessionReset, ValidationFailed,
    VerificationCompleted, VerificationFailed, VerificationStarted,
};
use crate::infrastructure::{ReportDocument, ReportStore};
use crate::integrations::ScoringEngine;

pub const EMPTY_INPUT_MESSAGE: &str = "Please upload a certificate or enter text details.";

#[derive(Debug, Clone)]
pub struct SelectFileRequest {
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
}

pub struct VerificationService {
    session: Mutex<VerificationSession>,
    engine: Arc<dyn ScoringEngine>,
    event_bus: Arc<EventBus>,
    reports: ReportStore,
}

impl VerificationService {
    pub fn new(
        engine: Arc<dyn ScoringEngine>,
        event_bus: Arc<EventBus>,
        reports: ReportStore,
    ) -> Self {
        let session = VerificationSession::new();
        log::info!(
            "[SESSION] Mounted session {} with {} engine",
            session.id,
            engine.name()
        );

        Self {
            session: Mutex::new(session),
            engine,
            event_bus,
            reports,
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, VerificationSession>> {
        Ok(self.session.lock()?)
    }

    /// Copy of the current session state
    pub fn snapshot(&self) -> AppResult<VerificationSession> {
        let session = self.lock()?;
        validate_session(&session)?;
        Ok(session.clone())
    }

    pub fn phase(&self) -> AppResult<Phase> {
        Ok(self.lock()?.phase)
    }

    pub fn result_view(&self) -> AppResult<Option<ResultView>> {
        Ok(self.lock()?.result.as_ref().map(ResultView::from_result))
    }

    // ------------------------------------------------------------------
    // Input stage
    // ------------------------------------------------------------------

    /// Hold a file from the picker or a drop target, replacing any previous one
    pub fn select_file(&self, request: SelectFileRequest) -> AppResult<FileReference> {
        let file = FileReference::from_path(request.path, request.size_bytes);

        let (session_id, replaced) = {
            let mut session = self.lock()?;
            let previous = session.select_file(file.clone());
            (session.id, previous.is_some())
        };

        if !file.has_suggested_extension {
            log::warn!(
                "[SESSION] Accepting {} with an unsuggested extension",
                file.name
            );
        }

        self.event_bus.emit(FileAccepted::new(
            session_id,
            file.name.clone(),
            file.path.clone(),
            replaced,
        ));

        Ok(file)
    }

    pub fn clear_file(&self) -> AppResult<Option<FileReference>> {
        Ok(self.lock()?.clear_file())
    }

    pub fn set_text(&self, text: String) -> AppResult<()> {
        self.lock()?.set_text(text);
        Ok(())
    }

    pub fn select_mode(&self, mode: InputMode) -> AppResult<()> {
        self.lock()?.select_mode(mode);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Submit the current input for scoring.
    ///
    /// Errors:
    /// - Validation: no file and no non-blank text (session stays idle)
    /// - SubmissionInProgress: another submit has not resolved yet
    /// - InvalidPhase: a result is showing
    /// - whatever the engine returns (session goes back to idle)
    pub async fn submit(&self) -> AppResult<VerificationResult> {
        let (session_id, input) = {
            let mut session = self.lock()?;

            match session.phase {
                Phase::Submitting => return Err(AppError::SubmissionInProgress),
                Phase::ResultReady => {
                    return Err(AppError::InvalidPhase(
                        "a result is showing, reset before submitting again".to_string(),
                    ))
                }
                Phase::Idle => {}
            }

            let Some(input) = session.captured_input() else {
                let session_id = session.id;
                drop(session);

                log::warn!("[SESSION] Submit rejected: no input");
                self.event_bus.emit(ValidationFailed::new(
                    session_id,
                    EMPTY_INPUT_MESSAGE.to_string(),
                ));
                return Err(AppError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
            };

            session.begin_submission(input.clone())?;
            (session.id, input)
        };

        log::info!("[SESSION] Submitting {}", input.summary());
        self.event_bus
            .emit(VerificationStarted::new(session_id, input.summary()));

        let outcome = self.engine.score(&input).await.and_then(|result| {
            validate_verification_result(&result)?;
            Ok(result)
        });

        match outcome {
            Ok(result) => {
                self.lock()?.complete_submission(result.clone())?;

                log::info!(
                    "[SESSION] Scored {} ({})",
                    result.score,
                    result.status
                );
                self.event_bus.emit(VerificationCompleted::new(
                    session_id,
                    result.score,
                    result.status,
                ));
                Ok(result)
            }
            Err(error) => {
                self.lock()?.abort_submission()?;

                log::error!("[SESSION] Scoring failed: {}", error);
                self.event_bus
                    .emit(VerificationFailed::new(session_id, error.to_string()));
                Err(error)
            }
        }
    }

    // ------------------------------------------------------------------
    // Result view
    // ------------------------------------------------------------------

    /// Dismiss the result. Inputs are kept. Returns false if already idle.
    pub fn reset(&self) -> AppResult<bool> {
        let (session_id, changed) = {
            let mut session = self.lock()?;
            if session.phase == Phase::Submitting {
                return Err(AppError::SubmissionInProgress);
            }
            (session.id, session.reset()?)
        };

        if changed {
            log::info!("[SESSION] Reset to idle");
            self.event_bus.emit(SessionReset::new(session_id));
        }
        Ok(changed)
    }

    /// Write the showing result as a report file
    pub fn export_report(&self) -> AppResult<PathBuf> {
        let report = {
            let session = self.lock()?;
            let result = session.result.clone().ok_or(AppError::NotFound)?;
            let input_summary = session
                .submitted_input
                .as_ref()
                .map(|input| input.summary())
                .unwrap_or_default();
            ReportDocument::new(session.id, input_summary, result)
        };

        let path = self.reports.write(&report)?;
        self.event_bus
            .emit(ReportExported::new(report.report_id, path.clone()));
        Ok(path)
    }
}
