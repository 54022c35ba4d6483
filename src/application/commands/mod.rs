// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// - Commands are thin adapters between UI and the verification service
// - Commands accept DTOs or plain values, return DTOs
// - Commands convert errors to ErrorResponse JSON
// - Commands NEVER contain business logic

pub mod report_commands;
pub mod session_commands;
pub mod verification_commands;

pub use report_commands::*;
pub use session_commands::*;
pub use verification_commands::*;
