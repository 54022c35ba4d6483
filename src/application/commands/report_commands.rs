// src/application/commands/report_commands.rs

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::{dto::*, state::AppState};

/// "Download Report": write the showing result to the report directory
#[tauri::command]
pub async fn export_report(state: State<'_, AppState>) -> Result<ReportExportedDto, String> {
    let path = state
        .verification_service
        .export_report()
        .to_error_response()?;

    Ok(ReportExportedDto {
        path: path.to_string_lossy().to_string(),
    })
}
