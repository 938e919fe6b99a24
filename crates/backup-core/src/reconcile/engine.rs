//! Reconciler implementation
//!
//! Walks the manifest in order, classifies each entry with the decision
//! table and performs the copies the table asks for.

use std::ffi::OsStr;

use chrono::Utc;

use backup_fs::{
    DefaultPath, FileStamp, NormalizedPath, RobustnessConfig, io, read_manifest,
    validate_entry_name,
};

use crate::decision::{Presence, decide};
use crate::outcome::{Direction, Outcome, Side};
use crate::{Error, Result};

use super::report::{EntryResult, ReconcileReport, Transfer};

/// Source of existence and modification-time facts.
pub trait FileOracle {
    fn stamp(&self, path: &NormalizedPath) -> FileStamp;
}

/// Copies one file over another, replacing the destination.
pub trait CopyPrimitive {
    /// Returns the number of bytes copied.
    fn copy(
        &self,
        source: &NormalizedPath,
        destination: &NormalizedPath,
    ) -> backup_fs::Result<u64>;
}

/// [`FileOracle`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOracle;

impl FileOracle for FsOracle {
    fn stamp(&self, path: &NormalizedPath) -> FileStamp {
        backup_fs::stamp(path)
    }
}

/// [`CopyPrimitive`] using atomic temp-then-rename copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier {
    robustness: RobustnessConfig,
}

impl FsCopier {
    pub fn new(robustness: RobustnessConfig) -> Self {
        Self { robustness }
    }
}

impl CopyPrimitive for FsCopier {
    fn copy(
        &self,
        source: &NormalizedPath,
        destination: &NormalizedPath,
    ) -> backup_fs::Result<u64> {
        io::copy_atomic(source, destination, self.robustness)
    }
}

/// Arguments of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    pub manifest: NormalizedPath,
    pub primary: NormalizedPath,
    /// May be empty, meaning there is no secondary location.
    pub secondary: NormalizedPath,
    pub destination: NormalizedPath,
    pub direction: Direction,
}

impl ReconcileRequest {
    pub fn new(
        manifest: impl Into<NormalizedPath>,
        primary: impl Into<NormalizedPath>,
        secondary: impl Into<NormalizedPath>,
        destination: impl Into<NormalizedPath>,
        direction: Direction,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            destination: destination.into(),
            direction,
        }
    }

    /// Check the preconditions: manifest, primary and destination are set.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("manifest", &self.manifest),
            ("primary", &self.primary),
            ("destination", &self.destination),
        ] {
            if value.is_empty() {
                return Err(Error::EmptyArgument { name });
            }
        }
        Ok(())
    }

    fn root(&self, side: Side) -> &NormalizedPath {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }
}

/// Drives a reconciliation pass.
///
/// The oracle and copier are pluggable so the engine can be exercised
/// without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct Reconciler<O = FsOracle, C = FsCopier> {
    oracle: O,
    copier: C,
}

impl Reconciler {
    /// Create a reconciler backed by the real filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: FileOracle, C: CopyPrimitive> Reconciler<O, C> {
    pub fn with_parts(oracle: O, copier: C) -> Self {
        Self { oracle, copier }
    }

    /// Classify every entry and perform the copies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyArgument`] when a required path is empty and
    /// [`Error::Fs`] when the manifest exists but cannot be read. A missing
    /// manifest is not an error: it yields a single `Impossible` entry.
    pub fn run(&self, request: &ReconcileRequest) -> Result<ReconcileReport> {
        self.execute(request, true)
    }

    /// Classify every entry without copying anything.
    pub fn plan(&self, request: &ReconcileRequest) -> Result<ReconcileReport> {
        self.execute(request, false)
    }

    fn execute(&self, request: &ReconcileRequest, apply: bool) -> Result<ReconcileReport> {
        request.validate()?;
        let started_at = Utc::now();

        let (entries, manifest_missing) = match read_manifest(&request.manifest) {
            Ok(manifest) => {
                let entries = manifest
                    .iter()
                    .map(|entry| self.process(request, entry, apply))
                    .collect();
                (entries, false)
            }
            Err(backup_fs::Error::ManifestNotFound { .. }) => {
                tracing::warn!(manifest = %request.manifest, "Manifest not found");
                let missing = EntryResult::new(
                    DefaultPath::Manifest.as_str(),
                    Outcome::Impossible,
                    Transfer::NotRequired,
                );
                (vec![missing], true)
            }
            Err(e) => return Err(e.into()),
        };

        let report = ReconcileReport {
            direction: request.direction,
            manifest_missing,
            dry_run: !apply,
            entries,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            direction = %request.direction,
            entries = report.entries.len(),
            copied = report.copied(),
            conflicts = report.count(Outcome::Conflict),
            impossible = report.count(Outcome::Impossible),
            status = ?report.status(),
            "Reconciliation finished"
        );
        Ok(report)
    }

    fn process(&self, request: &ReconcileRequest, entry: &OsStr, apply: bool) -> EntryResult {
        // Reported names are for display; lookups use the raw entry.
        let name = entry.to_string_lossy();

        if let Err(reason) = validate_entry_name(entry) {
            tracing::warn!(entry = %name, %reason, "Rejected manifest entry");
            return EntryResult::new(name, Outcome::Impossible, Transfer::NotRequired);
        }

        let primary = self.oracle.stamp(&request.primary.join(entry));
        let secondary = if request.secondary.is_empty() {
            FileStamp::Absent
        } else {
            self.oracle.stamp(&request.secondary.join(entry))
        };

        let presence = Presence::from_stamps(primary, secondary);
        let outcome = decide(request.direction, presence);
        tracing::debug!(entry = %name, ?presence, %outcome, "Classified entry");

        let transfer = match outcome.source() {
            None => Transfer::NotRequired,
            Some(_) if !apply => Transfer::DryRun,
            Some(side) => self.transfer(request, entry, side),
        };

        EntryResult::new(name, outcome, transfer)
    }

    fn transfer(&self, request: &ReconcileRequest, entry: &OsStr, side: Side) -> Transfer {
        let source = request.root(side).join(entry);
        let destination = request.destination.join(entry);

        match self.copier.copy(&source, &destination) {
            Ok(bytes) => {
                tracing::info!(%source, %destination, bytes, "Copied entry");
                Transfer::Copied { bytes }
            }
            Err(e) => {
                tracing::warn!(%source, %destination, error = %e, "Copy failed");
                Transfer::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
