// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Submission rejected because there is nothing to verify
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A verification is already in progress")]
    SubmissionInProgress,

    #[error("Operation not allowed in current phase: {0}")]
    InvalidPhase(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AppError::Other(format!("Session lock poisoned: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
