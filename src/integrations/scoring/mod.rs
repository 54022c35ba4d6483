// src/integrations/scoring/mod.rs
//
// Scoring Engine seam
//
// Everything that turns a submitted certificate into a VerificationResult
// sits behind ScoringEngine. The canned engine is the demo adapter; a real
// analysis backend plugs in here with its own failure modes.

pub mod canned;

use async_trait::async_trait;

use crate::domain::{SubmittedInput, VerificationResult};
use crate::error::AppResult;

pub use canned::{canned_records, CannedScoringEngine};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Score one submitted input. May take a while; may fail.
    async fn score(&self, input: &SubmittedInput) -> AppResult<VerificationResult>;
}
