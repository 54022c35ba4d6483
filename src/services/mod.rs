// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod verification_service;


pub use verification_service::{SelectFileRequest, VerificationService, EMPTY_INPUT_MESSAGE};
