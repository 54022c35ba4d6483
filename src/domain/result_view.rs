// Result presentation
//
// Pure mapping from a VerificationResult to what the result screen shows.
// The score band comes from the score alone and the badge from the status
// alone. They are rendered side by side and never reconciled.

use serde::{Deserialize, Serialize};

use super::verification::{VerificationResult, VerificationStatus, MAX_SCORE};

pub const GENUINE_BAND_FLOOR: u8 = 70;
pub const SUSPICIOUS_BAND_FLOOR: u8 = 40;

/// Colour band of the score bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= GENUINE_BAND_FLOOR {
            ScoreBand::Green
        } else if score >= SUSPICIOUS_BAND_FLOOR {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }
}

/// How a single check cell is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CheckMark {
    Pass,
    Fail,
    Number(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIndicator {
    pub label: String,
    pub mark: CheckMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoField {
    pub label: String,
    pub value: String,
}

/// Everything the result screen displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub score: u8,
    pub score_caption: String,
    pub band: ScoreBand,
    pub status: VerificationStatus,
    pub status_badge: String,
    pub extracted_fields: Vec<InfoField>,
    pub technologies: Vec<String>,
    pub checks: Vec<CheckIndicator>,
}

pub fn status_badge(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Genuine => "✅ Likely Genuine",
        VerificationStatus::Suspicious => "⚠️ Suspicious",
        VerificationStatus::Fake => "❌ Likely Fake",
    }
}

impl ResultView {
    pub fn from_result(result: &VerificationResult) -> Self {
        let info = &result.extracted_info;
        let extracted_fields = [
            ("Company", &info.company_name),
            ("Role", &info.role),
            ("Duration", &info.duration),
            ("Mentor", &info.mentor),
            ("Domain", &info.domain),
        ]
        .into_iter()
        .map(|(label, value)| InfoField {
            label: label.to_string(),
            value: value.clone(),
        })
        .collect();

        let mut checks: Vec<CheckIndicator> = result
            .checks
            .flags()
            .into_iter()
            .map(|(label, passed)| CheckIndicator {
                label: label.to_string(),
                mark: if passed { CheckMark::Pass } else { CheckMark::Fail },
            })
            .collect();
        checks.push(CheckIndicator {
            label: "Consistency Score".to_string(),
            mark: CheckMark::Number(result.checks.consistency_score),
        });

        Self {
            score: result.score,
            score_caption: format!("out of {}", MAX_SCORE),
            band: ScoreBand::for_score(result.score),
            status: result.status,
            status_badge: status_badge(result.status).to_string(),
            extracted_fields,
            technologies: info.technologies.clone(),
            checks,
        }
    }

    /// Plain-text rendering, used for reports and logs
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Verification Score: {} {}\n", self.score, self.score_caption));
        out.push_str(&format!("Band: {:?}\n", self.band));
        out.push_str(&format!("Status: {}\n", self.status_badge));
        out.push_str("\nExtracted Information\n");
        for field in &self.extracted_fields {
            out.push_str(&format!("  {}: {}\n", field.label, field.value));
        }
        out.push_str(&format!("  Technologies: {}\n", self.technologies.join(", ")));
        out.push_str("\nDetailed Analysis\n");
        for check in &self.checks {
            let mark = match &check.mark {
                CheckMark::Pass => "[x]".to_string(),
                CheckMark::Fail => "[ ]".to_string(),
                CheckMark::Number(n) => n.to_string(),
            };
            out.push_str(&format!("  {} {}\n", mark, check.label));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verification::{ExtractedInfo, VerificationChecks};

    fn result(score: u8, status: VerificationStatus) -> VerificationResult {
        VerificationResult::new(
            score,
            status,
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
    fn test_band_edges() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Green);
        assert_eq!(ScoreBand::for_score(70), ScoreBand::Green);
        assert_eq!(ScoreBand::for_score(69), ScoreBand::Yellow);
        assert_eq!(ScoreBand::for_score(40), ScoreBand::Yellow);
        assert_eq!(ScoreBand::for_score(39), ScoreBand::Red);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Red);
    }

    #[test]
    fn test_band_and_status_are_not_reconciled() {
        let view = ResultView::from_result(&result(90, VerificationStatus::Fake));

        assert_eq!(view.band, ScoreBand::Green);
        assert_eq!(view.status, VerificationStatus::Fake);
        assert_eq!(view.status_badge, "❌ Likely Fake");
    }

    #[test]
    fn test_checks_grid() {
        let view = ResultView::from_result(&result(45, VerificationStatus::Suspicious));

        assert_eq!(view.checks.len(), 6);
        assert_eq!(view.checks[0].mark, CheckMark::Pass);
        assert_eq!(view.checks[1].mark, CheckMark::Fail);
        assert_eq!(view.checks[5].label, "Consistency Score");
        assert_eq!(view.checks[5].mark, CheckMark::Number(38));
    }

    #[test]
    fn test_extracted_fields_verbatim() {
        let view = ResultView::from_result(&result(45, VerificationStatus::Suspicious));

        assert_eq!(view.extracted_fields[0].value, "GlobalTech Inc");
        assert_eq!(view.extracted_fields[1].value, "Marketing Intern");
        assert_eq!(view.technologies, vec!["Python", "Machine Learning", "SQL"]);
        assert_eq!(view.score_caption, "out of 100");
    }

    #[test]
    fn test_render_text() {
        let text =
            ResultView::from_result(&result(45, VerificationStatus::Suspicious)).render_text();

        assert!(text.starts_with("Verification Score: 45 out of 100"));
        assert!(text.contains("Status: ⚠️ Suspicious"));
        assert!(text.contains("Technologies: Python, Machine Learning, SQL"));
        assert!(text.contains("[ ] Mentor Check"));
        assert!(text.contains("38 Consistency Score"));
    }
}
