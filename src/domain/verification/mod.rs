pub mod entity;
pub mod invariants;

pub use entity::{ExtractedInfo, VerificationChecks, VerificationResult, VerificationStatus};
pub use invariants::{validate_verification_result, MAX_SCORE};
