//! Seed run outcome reporting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Entity kinds the seeder processes, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Survey,
    Response,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Survey => write!(f, "survey"),
            EntityKind::Response => write!(f, "response"),
        }
    }
}

/// Attempt counters for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub attempted: u64,
    pub created: u64,
    pub failed: u64,
}

/// One recorded failure, with enough context to diagnose it from the
/// report alone.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub kind: EntityKind,
    pub entity_id: String,
    /// Classification label ("unauthorized", "not-found", ...).
    pub classification: String,
    /// Human-readable failure description.
    pub reason: String,
}

/// Errors that can occur when persisting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a completed seed run.
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub users: Counts,
    pub surveys: Counts,
    pub responses: Counts,
    pub failures: Vec<FailureRecord>,
    /// Advisory notes for the operator, filled in when failures occurred.
    pub notes: Vec<String>,
    pub finished_at: DateTime<Utc>,
}

impl SeedReport {
    pub(crate) fn new() -> Self {
        Self {
            users: Counts::default(),
            surveys: Counts::default(),
            responses: Counts::default(),
            failures: Vec::new(),
            notes: Vec::new(),
            finished_at: Utc::now(),
        }
    }

    pub(crate) fn counts_mut(&mut self, kind: EntityKind) -> &mut Counts {
        match kind {
            EntityKind::User => &mut self.users,
            EntityKind::Survey => &mut self.surveys,
            EntityKind::Response => &mut self.responses,
        }
    }

    pub(crate) fn record_failure(
        &mut self,
        kind: EntityKind,
        entity_id: &str,
        classification: &str,
        reason: String,
    ) {
        self.counts_mut(kind).failed += 1;
        self.failures.push(FailureRecord {
            kind,
            entity_id: entity_id.to_string(),
            classification: classification.to_string(),
            reason,
        });
    }

    /// Attach advisory notes and stamp the completion time.
    pub(crate) fn finish(&mut self) {
        if self
            .failures
            .iter()
            .any(|f| f.classification == "unauthorized")
        {
            self.notes.push(
                "seeding endpoints returned unauthorized; review FORMBRICKS_API_KEY and its \
                 permissions (the key needs the management scope)"
                    .to_string(),
            );
        }
        if !self.failures.is_empty() {
            self.notes.push(
                "the full generated dataset remains on disk and can be imported manually via \
                 the Formbricks UI"
                    .to_string(),
            );
        }
        self.finished_at = Utc::now();
    }

    /// Whether any entity failed to seed.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn total_created(&self) -> u64 {
        self.users.created + self.surveys.created + self.responses.created
    }

    pub fn total_failed(&self) -> u64 {
        self.users.failed + self.surveys.failed + self.responses.failed
    }

    /// Persist the report as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Log the per-kind outcome summary.
    pub fn log_summary(&self) {
        for (kind, counts) in [
            ("users", self.users),
            ("surveys", self.surveys),
            ("responses", self.responses),
        ] {
            tracing::info!(
                "{kind}: {} created, {} failed ({} attempted)",
                counts.created,
                counts.failed,
                counts.attempted
            );
        }
        for note in &self.notes {
            tracing::warn!("{note}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_failures_add_credentials_note() {
        let mut report = SeedReport::new();
        report.record_failure(
            EntityKind::Survey,
            "survey_1",
            "unauthorized",
            "unauthorized (check FORMBRICKS_API_KEY and its permissions)".to_string(),
        );
        report.finish();

        assert!(report.is_partial());
        assert_eq!(report.notes.len(), 2);
        assert!(report.notes[0].contains("unauthorized"));
        assert!(report.notes[1].contains("manually"));
    }

    #[test]
    fn test_clean_run_has_no_notes() {
        let mut report = SeedReport::new();
        report.counts_mut(EntityKind::User).attempted = 3;
        report.counts_mut(EntityKind::User).created = 3;
        report.finish();

        assert!(!report.is_partial());
        assert!(report.notes.is_empty());
    }

    #[test]
    fn test_save_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed_results").join("report.json");

        let mut report = SeedReport::new();
        report.record_failure(
            EntityKind::Response,
            "response_2",
            "server-error",
            "server returned HTTP 500".to_string(),
        );
        report.finish();
        report.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["failures"][0]["entity_id"], "response_2");
        assert_eq!(parsed["failures"][0]["classification"], "server-error");
    }
}
