// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{
    FileReference, InputMode, Phase, ResultView, VerificationResult, VerificationSession,
};
use crate::infrastructure::Notification;

// ============================================================================
// SESSION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    pub session_id: String,
    pub phase: String,
    pub active_mode: String,
    pub file: Option<FileReferenceDto>,
    pub text: String,
    /// Whether a submit would pass validation right now
    pub has_input: bool,
    /// True while a submission is in flight; the verify button is disabled
    pub busy: bool,
    pub result: Option<VerificationResult>,
    pub view: Option<ResultView>,
}

impl From<&VerificationSession> for SessionDto {
    fn from(session: &VerificationSession) -> Self {
        let active_mode = match session.active_mode {
            InputMode::Upload => "upload",
            InputMode::Text => "text",
        };

        Self {
            session_id: session.id.to_string(),
            phase: session.phase.to_string(),
            active_mode: active_mode.to_string(),
            file: session.file.as_ref().map(FileReferenceDto::from),
            text: session.text.clone(),
            has_input: session.captured_input().is_some(),
            busy: session.phase == Phase::Submitting,
            result: session.result.clone(),
            view: session.result.as_ref().map(ResultView::from_result),
        }
    }
}

// ============================================================================
// FILE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReferenceDto {
    pub id: String,
    pub name: String,
    pub path: String,
    pub size_bytes: Option<u64>,
    pub has_suggested_extension: bool,
}

impl From<&FileReference> for FileReferenceDto {
    fn from(file: &FileReference) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.name.clone(),
            path: file.path.to_string_lossy().to_string(),
            size_bytes: file.size_bytes,
            has_suggested_extension: file.has_suggested_extension,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectFileDto {
    pub path: String,
    pub size_bytes: Option<u64>,
}

// ============================================================================
// NOTIFICATION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub title: String,
    pub description: String,
    pub severity: String,
    pub created_at: String,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        let severity = serde_json::to_value(notification.severity)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        Self {
            title: notification.title,
            description: notification.description,
            severity,
            created_at: notification.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// REPORT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExportedDto {
    pub path: String,
}
