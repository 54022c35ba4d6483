// src/config.rs
//
// Runtime configuration
//
// Defaults come from the environment, with fall-backs for a fresh install.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const LATENCY_ENV: &str = "CERTICHECK_SCORING_LATENCY_MS";
pub const REPORT_DIR_ENV: &str = "CERTICHECK_REPORT_DIR";

const DEFAULT_LATENCY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Artificial delay of the canned scoring engine
    pub scoring_latency_ms: u64,

    /// Where exported reports are written
    pub report_dir: PathBuf,
}

impl VerifierConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let scoring_latency_ms = match lookup(LATENCY_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {}={:?}", LATENCY_ENV, raw);
                DEFAULT_LATENCY_MS
            }),
            None => DEFAULT_LATENCY_MS,
        };

        let report_dir = lookup(REPORT_DIR_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_report_dir);

        Self {
            scoring_latency_ms,
            report_dir,
        }
    }

    pub fn scoring_latency(&self) -> Duration {
        Duration::from_millis(self.scoring_latency_ms)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            scoring_latency_ms: DEFAULT_LATENCY_MS,
            report_dir: default_report_dir(),
        }
    }
}

/// {DOCUMENTS}/certicheck, or ./reports when there is no documents dir
fn default_report_dir() -> PathBuf {
    dirs::document_dir()
        .map(|dir| dir.join("certicheck"))
        .unwrap_or_else(|| PathBuf::from("./reports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = VerifierConfig::from_lookup(lookup(&[]));
        assert_eq!(config.scoring_latency_ms, 3000);
        assert_eq!(config.scoring_latency(), Duration::from_secs(3));
        assert_eq!(config.report_dir, default_report_dir());
    }

    #[test]
    fn test_reads_overrides() {
        let config = VerifierConfig::from_lookup(lookup(&[
            (LATENCY_ENV, " 250 "),
            (REPORT_DIR_ENV, "/srv/reports"),
        ]));
        assert_eq!(config.scoring_latency_ms, 250);
        assert_eq!(config.report_dir, PathBuf::from("/srv/reports"));
    }

    #[test]
    fn test_invalid_latency_falls_back() {
        let config = VerifierConfig::from_lookup(lookup(&[(LATENCY_ENV, "soon")]));
        assert_eq!(config.scoring_latency_ms, 3000);
    }
}
