// src/application/error_handling.rs
//
// Error Handling for Commands
//
// - Maps internal errors to user-friendly responses
// - Provides a consistent error format for the UI
// - Logs errors the user cannot act on

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Nothing to verify
    Validation,

    /// Request does not fit the current phase
    Conflict,

    NotFound,

    /// Domain invariant violation
    DomainError,

    /// Scoring engine failed
    ExternalService,

    FileSystem,

    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(message) => Self::new(ErrorType::Validation, message, None),

            AppError::SubmissionInProgress => Self::new(
                ErrorType::Conflict,
                "A verification is already in progress",
                None,
            ),

            AppError::InvalidPhase(details) => Self::new(
                ErrorType::Conflict,
                "Not available right now",
                Some(details),
            ),

            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Scoring(message) => {
                log::error!("Scoring error: {}", message);
                Self::new(ErrorType::ExternalService, "Verification failed", Some(message))
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }
}

/// Helper trait to convert Results to a JSON error string for Tauri
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Validation("Empty".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Empty");
        assert!(!error.success);
    }

    #[test]
    fn test_in_progress_is_conflict() {
        let error = ErrorResponse::from_app_error(AppError::SubmissionInProgress);
        assert_eq!(error.error_type, ErrorType::Conflict);
    }

    #[test]
    fn test_scoring_is_external() {
        let error = ErrorResponse::from_app_error(AppError::Scoring("timeout".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_domain_error_keeps_details() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvalidStateTransition("idle -> result_ready".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("idle -> result_ready"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::NotFound);
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("not_found"));
        assert!(json.contains("Resource not found"));
    }
}
