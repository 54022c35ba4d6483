// src/integrations/scoring/canned.rs
//
// Canned Scoring Engine
//
// Not a detector. Waits a fixed latency, then returns one of three fixed
// records picked uniformly at random. The submitted input is ignored.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::time::Duration;

use super::ScoringEngine;
use crate::domain::{
    ExtractedInfo, SubmittedInput, VerificationChecks, VerificationResult, VerificationStatus,
};
use crate::error::{AppError, AppResult};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(3000);

pub struct CannedScoringEngine {
    records: Vec<VerificationResult>,
    latency: Duration,
}

impl CannedScoringEngine {
    pub fn new(latency: Duration) -> Self {
        Self {
            records: canned_records(),
            latency,
        }
    }
}

impl Default for CannedScoringEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ScoringEngine for CannedScoringEngine {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn score(&self, input: &SubmittedInput) -> AppResult<VerificationResult> {
        log::debug!(
            "[SCORING] canned engine scoring {} after {:?}",
            input.summary(),
            self.latency
        );

        tokio::time::sleep(self.latency).await;

        self.records
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| AppError::Scoring("canned engine has no records".to_string()))
    }
}

/// The three fixed records: genuine, suspicious, fake
pub fn canned_records() -> Vec<VerificationResult> {
    vec![
        VerificationResult::new(
            85,
            VerificationStatus::Genuine,
            VerificationChecks {
                company_exists: true,
                domain_match: true,
                role_verification: true,
                mentor_check: true,
                duration_check: true,
                consistency_score: 82,
            },
            ExtractedInfo::new(
                "TechCorp Solutions",
                "3 months",
                "Sarah Johnson",
                "Software Development",
                "Frontend Developer Intern",
                &["React", "JavaScript", "CSS", "Git"],
            ),
        ),
        VerificationResult::new(
            45,
            VerificationStatus::Suspicious,
            VerificationChecks {
                company_exists: true,
                domain_match: false,
                role_verification: true,
                mentor_check: false,
                duration_check: true,
                consistency_score: 38,
            },
            ExtractedInfo::new(
                "GlobalTech Inc",
                "2 months",
                "John Smith",
                "Data Science",
                "Marketing Intern",
                &["Python", "Machine Learning", "SQL"],
            ),
        ),
        VerificationResult::new(
            25,
            VerificationStatus::Fake,
            VerificationChecks {
                company_exists: false,
                domain_match: false,
                role_verification: false,
                mentor_check: false,
                duration_check: false,
                consistency_score: 15,
            },
            ExtractedInfo::new(
                "XYZ Innovations",
                "1 week",
                "Jane Doe",
                "Blockchain",
                "Senior AI Engineer Intern",
                &["Blockchain", "AI", "Quantum Computing"],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_verification_result;
    use std::collections::HashSet;

    fn text(s: &str) -> SubmittedInput {
        SubmittedInput::Text(s.to_string())
    }

    #[test]
    fn test_records_are_valid() {
        let records = canned_records();
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(validate_verification_result(record).is_ok());
        }
    }

    #[test]
    fn test_record_scores_and_companies() {
        let pairs: Vec<(u8, String)> = canned_records()
            .into_iter()
            .map(|r| (r.score, r.extracted_info.company_name))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (85, "TechCorp Solutions".to_string()),
                (45, "GlobalTech Inc".to_string()),
                (25, "XYZ Innovations".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_returns_only_canned_records() {
        let engine = CannedScoringEngine::new(Duration::ZERO);
        let records = canned_records();

        for _ in 0..20 {
            let result = engine.score(&text("Company: Acme")).await.unwrap();
            assert!(records.contains(&result));
        }
    }

    #[tokio::test]
    async fn test_every_record_is_reachable() {
        let engine = CannedScoringEngine::new(Duration::ZERO);
        let mut seen = HashSet::new();

        for _ in 0..300 {
            let result = engine.score(&text("anything")).await.unwrap();
            seen.insert(result.score);
        }

        assert_eq!(seen, HashSet::from([85, 45, 25]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_configured_latency() {
        let engine = CannedScoringEngine::default();
        let started = tokio::time::Instant::now();

        engine.score(&text("Company: Acme")).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }
}
