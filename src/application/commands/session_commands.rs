// src/application/commands/session_commands.rs

use std::path::PathBuf;
use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};
use crate::config::VerifierConfig;
use crate::domain::InputMode;
use crate::services::SelectFileRequest;

/// Current session, including the rendered result view if any
#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionDto, String> {
    let session = state.verification_service.snapshot().to_error_response()?;
    Ok(SessionDto::from(&session))
}

/// File chosen in the picker or dropped on the upload area
#[tauri::command]
pub async fn select_file(
    dto: SelectFileDto,
    state: State<'_, AppState>,
) -> Result<FileReferenceDto, String> {
    let file = state
        .verification_service
        .select_file(SelectFileRequest {
            path: PathBuf::from(dto.path),
            size_bytes: dto.size_bytes,
        })
        .to_error_response()?;

    Ok(FileReferenceDto::from(&file))
}

#[tauri::command]
pub async fn clear_file(state: State<'_, AppState>) -> Result<Option<FileReferenceDto>, String> {
    let removed = state.verification_service.clear_file().to_error_response()?;
    Ok(removed.as_ref().map(FileReferenceDto::from))
}

#[tauri::command]
pub async fn set_text(text: String, state: State<'_, AppState>) -> Result<(), String> {
    state.verification_service.set_text(text).to_error_response()
}

#[tauri::command]
pub async fn select_mode(mode: InputMode, state: State<'_, AppState>) -> Result<(), String> {
    state.verification_service.select_mode(mode).to_error_response()
}

/// Pending toasts; the log is emptied by this call
#[tauri::command]
pub async fn get_notifications(
    state: State<'_, AppState>,
) -> Result<Vec<NotificationDto>, String> {
    Ok(state
        .notifications
        .drain()
        .into_iter()
        .map(NotificationDto::from)
        .collect())
}

#[tauri::command]
pub async fn get_config(state: State<'_, AppState>) -> Result<VerifierConfig, String> {
    Ok(state.config.clone())
}
