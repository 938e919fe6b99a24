//! Per-entry results and the run report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::outcome::{Direction, Outcome};

/// What actually happened on disk for one entry.
///
/// Kept apart from [`Outcome`] so the outcome always reflects the decision
/// table, while a failed copy is still visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Transfer {
    /// The outcome does not call for a copy
    NotRequired,
    /// A copy was called for but the run was a dry run
    DryRun,
    /// The copy completed
    Copied { bytes: u64 },
    /// The copy was attempted and failed
    Failed { reason: String },
}

impl Transfer {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result for one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResult {
    /// Filename as written in the manifest, as UTF-8 text (invalid bytes replaced)
    pub file: String,
    /// Decision-table outcome, serialized as its 1-6 code
    pub outcome: Outcome,
    /// Side effect of the outcome
    pub transfer: Transfer,
}

impl EntryResult {
    pub fn new(file: impl Into<String>, outcome: Outcome, transfer: Transfer) -> Self {
        Self {
            file: file.into(),
            outcome,
            transfer,
        }
    }
}

/// Overall verdict of a run, worst first: Failed > Incomplete > Conflicted > Clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every entry was resolved
    Clean,
    /// At least one entry is in conflict
    Conflicted,
    /// At least one entry (or the manifest) could not be found
    Incomplete,
    /// At least one copy failed
    Failed,
}

/// Everything a reconciliation pass produced, in manifest order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub direction: Direction,
    /// True when the run stopped because the manifest was missing
    pub manifest_missing: bool,
    pub dry_run: bool,
    pub entries: Vec<EntryResult>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ReconcileReport {
    /// `(filename, outcome)` pairs, in manifest order.
    pub fn pairs(&self) -> Vec<(String, Outcome)> {
        self.entries
            .iter()
            .map(|entry| (entry.file.clone(), entry.outcome))
            .collect()
    }

    /// `(filename, code)` pairs, the external integer form.
    pub fn codes(&self) -> Vec<(String, u8)> {
        self.entries
            .iter()
            .map(|entry| (entry.file.clone(), entry.outcome.code()))
            .collect()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn failed_transfers(&self) -> impl Iterator<Item = &EntryResult> {
        self.entries.iter().filter(|e| e.transfer.is_failed())
    }

    pub fn copied(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.transfer, Transfer::Copied { .. }))
            .count()
    }

    pub fn status(&self) -> RunStatus {
        if self.failed_transfers().next().is_some() {
            RunStatus::Failed
        } else if self.count(Outcome::Impossible) > 0 {
            RunStatus::Incomplete
        } else if self.count(Outcome::Conflict) > 0 {
            RunStatus::Conflicted
        } else {
            RunStatus::Clean
        }
    }
}
