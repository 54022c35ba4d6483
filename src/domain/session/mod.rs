pub mod entity;
pub mod invariants;

pub use entity::{
    FileReference, InputMode, Phase, SubmittedInput, VerificationSession, SUGGESTED_EXTENSIONS,
};
pub use invariants::{validate_session, validate_transition};
