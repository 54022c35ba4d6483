// src/application/commands/verification_commands.rs

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

/// Verify the current input. Resolves once the engine has answered.
#[tauri::command]
pub async fn submit_verification(state: State<'_, AppState>) -> Result<SessionDto, String> {
    let service = state.verification_service.clone();

    service.submit().await.to_error_response()?;

    let session = service.snapshot().to_error_response()?;
    Ok(SessionDto::from(&session))
}

/// "Verify Another Certificate"
#[tauri::command]
pub async fn reset_verification(state: State<'_, AppState>) -> Result<SessionDto, String> {
    let service = state.verification_service.clone();

    service.reset().to_error_response()?;

    let session = service.snapshot().to_error_response()?;
    Ok(SessionDto::from(&session))
}
