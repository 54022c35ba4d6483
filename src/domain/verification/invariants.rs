use super::entity::VerificationResult;
use crate::domain::{DomainError, DomainResult};

pub const MAX_SCORE: u8 = 100;

/// Validates all VerificationResult invariants
pub fn validate_verification_result(result: &VerificationResult) -> DomainResult<()> {
    validate_score("score", result.score)?;
    validate_score("consistency score", result.checks.consistency_score)?;
    Ok(())
}

fn validate_score(name: &str, value: u8) -> DomainResult<()> {
    if value > MAX_SCORE {
        return Err(DomainError::InvariantViolation(format!(
            "{} must be within 0..={}, got {}",
            name, MAX_SCORE, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verification::{ExtractedInfo, VerificationChecks, VerificationStatus};

    fn result_with(score: u8, consistency_score: u8) -> VerificationResult {
        VerificationResult::new(
            score,
            VerificationStatus::Genuine,
            VerificationChecks {
                company_exists: true,
                domain_match: true,
                role_verification: true,
                mentor_check: true,
                duration_check: true,
                consistency_score,
            },
            ExtractedInfo::new("Acme", "3 months", "A. Mentor", "Web", "Intern", &[]),
        )
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_verification_result(&result_with(0, 0)).is_ok());
        assert!(validate_verification_result(&result_with(100, 100)).is_ok());
    }

    #[test]
    fn test_score_above_100_fails() {
        let result = validate_verification_result(&result_with(101, 50));

        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.starts_with("score"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }

    #[test]
    fn test_consistency_above_100_fails() {
        let result = validate_verification_result(&result_with(50, 250));

        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("consistency score"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }
}
