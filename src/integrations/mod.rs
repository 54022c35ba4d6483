// src/integrations/mod.rs
//
// External Integrations Module
//
// Scoring engines live here; the canned engine stands in until a real
// analysis backend exists.

pub mod scoring;

pub use scoring::{canned_records, CannedScoringEngine, ScoringEngine};
