use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::invariants::validate_transition;
use crate::domain::verification::VerificationResult;
use crate::domain::{DomainError, DomainResult};

/// Extensions the picker suggests. Advisory only, nothing is rejected.
pub const SUGGESTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// A file handed over by the picker or a drop target.
/// The file is never opened; only the reference is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub id: Uuid,

    /// Display name (last path component)
    pub name: String,

    pub path: PathBuf,

    /// Size reported by the picker, if any
    pub size_bytes: Option<u64>,

    /// Whether the extension is one of SUGGESTED_EXTENSIONS
    pub has_suggested_extension: bool,
}

/// Which input tab is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Upload,
    Text,
}

/// Position in the idle → submitting → result_ready cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    ResultReady,
}

/// The input captured at submit time and handed to the scoring engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SubmittedInput {
    File(FileReference),
    Text(String),
}

/// State owned by one mounted verification view.
///
/// INVARIANTS:
/// - At most one file reference is held
/// - `result` is Some exactly when phase is ResultReady
/// - Switching mode never clears the other mode's value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSession {
    pub id: Uuid,
    pub file: Option<FileReference>,
    pub text: String,
    pub active_mode: InputMode,
    pub phase: Phase,
    /// Input captured by the submission in flight or the one that produced `result`
    pub submitted_input: Option<SubmittedInput>,
    pub result: Option<VerificationResult>,
    pub created_at: DateTime<Utc>,
}

impl FileReference {
    pub fn from_path(path: PathBuf, size_bytes: Option<u64>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let has_suggested_extension = has_suggested_extension(&path);

        Self {
            id: Uuid::new_v4(),
            name,
            path,
            size_bytes,
            has_suggested_extension,
        }
    }
}

fn has_suggested_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUGGESTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

impl SubmittedInput {
    /// Short description used in logs and reports
    pub fn summary(&self) -> String {
        match self {
            SubmittedInput::File(file) => format!("file: {}", file.name),
            SubmittedInput::Text(text) => format!("text: {} chars", text.chars().count()),
        }
    }
}

impl VerificationSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            file: None,
            text: String::new(),
            active_mode: InputMode::default(),
            phase: Phase::Idle,
            submitted_input: None,
            result: None,
            created_at: Utc::now(),
        }
    }

    /// Replace the held file, returning the previous one
    pub fn select_file(&mut self, file: FileReference) -> Option<FileReference> {
        self.file.replace(file)
    }

    pub fn clear_file(&mut self) -> Option<FileReference> {
        self.file.take()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn select_mode(&mut self, mode: InputMode) {
        self.active_mode = mode;
    }

    /// The input that a submit would send right now.
    ///
    /// A held file always wins over the text draft, regardless of the
    /// active tab. Whitespace-only text counts as no input.
    pub fn captured_input(&self) -> Option<SubmittedInput> {
        if let Some(file) = &self.file {
            return Some(SubmittedInput::File(file.clone()));
        }
        if self.text.trim().is_empty() {
            return None;
        }
        Some(SubmittedInput::Text(self.text.clone()))
    }

    pub fn begin_submission(&mut self, input: SubmittedInput) -> DomainResult<()> {
        validate_transition(self.phase, Phase::Submitting)?;
        self.submitted_input = Some(input);
        self.phase = Phase::Submitting;
        Ok(())
    }

    pub fn complete_submission(&mut self, result: VerificationResult) -> DomainResult<()> {
        validate_transition(self.phase, Phase::ResultReady)?;
        self.result = Some(result);
        self.phase = Phase::ResultReady;
        Ok(())
    }

    /// Scoring failed; go back to the input stage with no result
    pub fn abort_submission(&mut self) -> DomainResult<()> {
        if self.phase != Phase::Submitting {
            return Err(DomainError::InvalidStateTransition(format!(
                "cannot abort a submission from {:?}",
                self.phase
            )));
        }
        self.phase = Phase::Idle;
        self.submitted_input = None;
        self.result = None;
        Ok(())
    }

    /// Clear the result and return to Idle. Inputs are kept.
    /// Returns false when already Idle (no-op); refused while Submitting.
    pub fn reset(&mut self) -> DomainResult<bool> {
        match self.phase {
            Phase::Idle => return Ok(false),
            Phase::Submitting => {
                return Err(DomainError::InvalidStateTransition(
                    "cannot reset while a submission is in flight".to_string(),
                ))
            }
            Phase::ResultReady => validate_transition(self.phase, Phase::Idle)?,
        }
        self.submitted_input = None;
        self.result = None;
        self.phase = Phase::Idle;
        Ok(true)
    }
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Submitting => write!(f, "submitting"),
            Phase::ResultReady => write!(f, "result_ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verification::{ExtractedInfo, VerificationChecks, VerificationStatus};

    fn text_input() -> SubmittedInput {
        SubmittedInput::Text("Company: Acme".to_string())
    }

    fn result() -> VerificationResult {
        VerificationResult::new(
            85,
            VerificationStatus::Genuine,
            VerificationChecks {
                company_exists: true,
                domain_match: true,
                role_verification: true,
                mentor_check: true,
                duration_check: true,
                consistency_score: 82,
            },
            ExtractedInfo::new(
                "TechCorp Solutions",
                "3 months",
                "Sarah Johnson",
                "Software Development",
                "Frontend Developer Intern",
                &["React"],
            ),
        )
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = VerificationSession::new();
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.active_mode, InputMode::Upload);
        assert!(session.file.is_none());
        assert!(session.result.is_none());
        assert!(session.captured_input().is_none());
    }

    #[test]
    fn test_file_reference_extension_hint_is_advisory() {
        let pdf = FileReference::from_path(PathBuf::from("/tmp/certificate.PDF"), None);
        let docx = FileReference::from_path(PathBuf::from("/tmp/certificate.docx"), Some(10));

        assert_eq!(pdf.name, "certificate.PDF");
        assert!(pdf.has_suggested_extension);
        assert!(!docx.has_suggested_extension);
    }

    #[test]
    fn test_select_file_replaces_previous() {
        let mut session = VerificationSession::new();
        let first = FileReference::from_path(PathBuf::from("/a.pdf"), None);
        let second = FileReference::from_path(PathBuf::from("/b.png"), None);

        assert!(session.select_file(first.clone()).is_none());
        let previous = session.select_file(second.clone());

        assert_eq!(previous, Some(first));
        assert_eq!(session.file, Some(second));
    }

    #[test]
    fn test_whitespace_text_is_not_input() {
        let mut session = VerificationSession::new();
        session.set_text("  \n\t ".to_string());
        assert!(session.captured_input().is_none());
    }

    #[test]
    fn test_file_wins_over_text() {
        let mut session = VerificationSession::new();
        session.set_text("Company: Acme".to_string());
        session.select_mode(InputMode::Text);
        let file = FileReference::from_path(PathBuf::from("/c.jpg"), None);
        session.select_file(file.clone());

        assert_eq!(session.captured_input(), Some(SubmittedInput::File(file)));
    }

    #[test]
    fn test_mode_switch_keeps_both_values() {
        let mut session = VerificationSession::new();
        session.set_text("draft".to_string());
        session.select_file(FileReference::from_path(PathBuf::from("/d.pdf"), None));

        session.select_mode(InputMode::Text);
        session.select_mode(InputMode::Upload);

        assert_eq!(session.text, "draft");
        assert!(session.file.is_some());
    }

    #[test]
    fn test_full_cycle() {
        let mut session = VerificationSession::new();
        session.set_text("Company: Acme".to_string());

        let input = session.captured_input().unwrap();
        session.begin_submission(input).unwrap();
        assert_eq!(session.phase, Phase::Submitting);
        assert_eq!(session.submitted_input, Some(text_input()));

        session.complete_submission(result()).unwrap();
        assert_eq!(session.phase, Phase::ResultReady);
        assert_eq!(session.result, Some(result()));

        assert!(session.reset().unwrap());
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.result.is_none());
        assert!(session.submitted_input.is_none());
        assert_eq!(session.text, "Company: Acme");
    }

    #[test]
    fn test_reset_when_idle_is_noop() {
        let mut session = VerificationSession::new();
        assert!(!session.reset().unwrap());
        assert!(!session.reset().unwrap());
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn test_reset_while_submitting_fails() {
        let mut session = VerificationSession::new();
        session.begin_submission(text_input()).unwrap();

        assert!(matches!(
            session.reset(),
            Err(DomainError::InvalidStateTransition(_))
        ));
        assert_eq!(session.phase, Phase::Submitting);
        assert_eq!(session.submitted_input, Some(text_input()));

        // The in-flight submission can still land
        session.complete_submission(result()).unwrap();
        assert_eq!(session.phase, Phase::ResultReady);
    }

    #[test]
    fn test_double_begin_fails() {
        let mut session = VerificationSession::new();
        session.begin_submission(text_input()).unwrap();
        assert!(session.begin_submission(text_input()).is_err());
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut session = VerificationSession::new();
        session.begin_submission(text_input()).unwrap();
        session.abort_submission().unwrap();
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.abort_submission().is_err());
    }

    #[test]
    fn test_submitted_input_summary() {
        let text = SubmittedInput::Text("héllo".to_string());
        assert_eq!(text.summary(), "text: 5 chars");

        let file =
            SubmittedInput::File(FileReference::from_path(PathBuf::from("/x/cert.pdf"), None));
        assert_eq!(file.summary(), "file: cert.pdf");
    }
}
