// src/infrastructure/report_store.rs
//
// Report Store
//
// Writes exported verification reports as pretty JSON files.
// One file per report, named after the report id. Existing files are
// never overwritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::domain::{ResultView, VerificationResult};
use crate::error::{AppError, AppResult};

/// Serialized body of an exported report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub report_id: Uuid,
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// What was submitted, e.g. "file: cert.pdf"
    pub input_summary: String,
    pub result: VerificationResult,
    pub rendered: String,
}

impl ReportDocument {
    pub fn new(session_id: Uuid, input_summary: String, result: VerificationResult) -> Self {
        let rendered = ResultView::from_result(&result).render_text();
        Self {
            report_id: Uuid::new_v4(),
            session_id,
            generated_at: Utc::now(),
            input_summary,
            result,
            rendered,
        }
    }

    pub fn file_name(&self) -> String {
        format!("certicheck-report-{}.json", self.report_id)
    }
}

#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the report, creating the directory if needed
    pub fn write(&self, report: &ReportDocument) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(report.file_name());
        if path.exists() {
            return Err(AppError::Other(format!(
                "Report already exists: {}",
                path.display()
            )));
        }

        let body = serde_json::to_string_pretty(report)?;
        fs::write(&path, body)?;

        log::info!("[REPORT] Wrote {}", path.display());
        Ok(path)
    }
}
