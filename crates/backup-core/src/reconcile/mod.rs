//! Manifest-driven reconciliation
//!
//! [`Reconciler`] is the engine; [`reconcile`] is the one-call form of the
//! invocation contract, returning `(filename, outcome)` pairs.

mod engine;
mod report;

pub use engine::{
    CopyPrimitive, FileOracle, FsCopier, FsOracle, ReconcileRequest, Reconciler,
};
pub use report::{EntryResult, ReconcileReport, RunStatus, Transfer};

use std::path::Path;

use crate::Result;
use crate::outcome::{Direction, Outcome};

/// Reconcile `manifest` against the filesystem and return the outcome of
/// every entry in manifest order.
///
/// `forward` selects backup (primary authoritative) over restore. A missing
/// manifest yields exactly `[("Backup.parm", Outcome::Impossible)]`.
pub fn reconcile(
    manifest: impl AsRef<Path>,
    primary: impl AsRef<Path>,
    secondary: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    forward: bool,
) -> Result<Vec<(String, Outcome)>> {
    let request = ReconcileRequest::new(
        manifest.as_ref(),
        primary.as_ref(),
        secondary.as_ref(),
        destination.as_ref(),
        Direction::from_forward(forward),
    );
    Ok(Reconciler::new().run(&request)?.pairs())
}
