// src/application/mod.rs
//
// Application Layer
//
// - Boundary between UI (Tauri) and the verification service
// - Translates between DTOs and domain types
// - Tauri-specific pieces compile only with the `desktop` feature

pub mod dto;
pub mod error_handling;
pub mod state;

#[cfg(feature = "desktop")]
pub mod commands;
#[cfg(feature = "desktop")]
pub mod notifier;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;

#[cfg(feature = "desktop")]
pub use commands::*;
#[cfg(feature = "desktop")]
pub use notifier::WindowNotifier;
