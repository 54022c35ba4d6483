use serde::{Deserialize, Serialize};

/// Outcome of verifying one internship certificate.
///
/// `status` and `score` are carried independently. The score bands used for
/// presentation may disagree with `status`; neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Overall score, 0..=100
    pub score: u8,

    pub status: VerificationStatus,

    pub checks: VerificationChecks,

    pub extracted_info: ExtractedInfo,
}

/// Categorical verdict attached to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Genuine,
    Suspicious,
    Fake,
}

/// Per-aspect sub-checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationChecks {
    pub company_exists: bool,
    pub domain_match: bool,
    pub role_verification: bool,
    pub mentor_check: bool,
    pub duration_check: bool,

    /// 0..=100
    pub consistency_score: u8,
}

/// Fields read out of the submitted certificate, shown verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub company_name: String,
    pub duration: String,
    pub mentor: String,
    pub domain: String,
    pub role: String,

    /// Order is significant
    pub technologies: Vec<String>,
}

impl VerificationResult {
    pub fn new(
        score: u8,
        status: VerificationStatus,
        checks: VerificationChecks,
        extracted_info: ExtractedInfo,
    ) -> Self {
        Self {
            score,
            status,
            checks,
            extracted_info,
        }
    }
}

impl VerificationChecks {
    /// The five boolean checks in display order
    pub fn flags(&self) -> [(&'static str, bool); 5] {
        [
            ("Company Exists", self.company_exists),
            ("Domain Match", self.domain_match),
            ("Role Verification", self.role_verification),
            ("Mentor Check", self.mentor_check),
            ("Duration Check", self.duration_check),
        ]
    }
}

impl ExtractedInfo {
    pub fn new(
        company_name: impl Into<String>,
        duration: impl Into<String>,
        mentor: impl Into<String>,
        domain: impl Into<String>,
        role: impl Into<String>,
        technologies: &[&str],
    ) -> Self {
        Self {
            company_name: company_name.into(),
            duration: duration.into(),
            mentor: mentor.into(),
            domain: domain.into(),
            role: role.into(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Genuine => write!(f, "genuine"),
            VerificationStatus::Suspicious => write!(f, "suspicious"),
            VerificationStatus::Fake => write!(f, "fake"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VerificationResult {
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
        )
    }

    #[test]
    fn test_serializes_with_ui_field_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["status"], "suspicious");
        assert_eq!(json["checks"]["companyExists"], true);
        assert_eq!(json["checks"]["consistencyScore"], 38);
        assert_eq!(json["extractedInfo"]["companyName"], "GlobalTech Inc");
        assert_eq!(json["extractedInfo"]["technologies"][1], "Machine Learning");
    }

    #[test]
    fn test_flags_keep_display_order() {
        let labels: Vec<&str> = sample().checks.flags().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Company Exists",
                "Domain Match",
                "Role Verification",
                "Mentor Check",
                "Duration Check"
            ]
        );
    }
}
