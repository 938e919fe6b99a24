//! Decision table and reconciliation engine
//!
//! This crate decides, for every filename in a manifest, whether a file
//! should be copied from the primary root, copied from the secondary root,
//! left alone, reported as a conflict or reported as impossible, and then
//! performs the copies:
//!
//! - **Outcomes**: [`Outcome`] (integer codes 1-6) and [`Direction`]
//! - **Decision table**: [`decide`] over a [`Presence`] built from two file stamps
//! - **Reconciler**: [`Reconciler`] with pluggable [`FileOracle`] and [`CopyPrimitive`]
//! - **Profiles**: [`Profile`] configuration layered from files and flags
//!
//! # Architecture
//!
//! ```text
//!            backup-cli
//!                |
//!           backup-core
//!                |
//!            backup-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use backup_core::{Outcome, reconcile};
//!
//! fn example() -> backup_core::Result<()> {
//!     let results = reconcile("Backup.parm", "hd", "pen", "backup-destino", true)?;
//!     for (file, outcome) in results {
//!         if outcome == Outcome::Conflict {
//!             println!("{file} is newer on the removable drive");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod decision;
pub mod error;
pub mod outcome;
pub mod profile;
pub mod reconcile;

pub use decision::{Freshness, Presence, decide};
pub use error::{Error, Result};
pub use outcome::{Direction, Outcome, Side};
pub use profile::Profile;
pub use reconcile::{
    CopyPrimitive, EntryResult, FileOracle, FsCopier, FsOracle, ReconcileReport, ReconcileRequest,
    Reconciler, RunStatus, Transfer, reconcile,
};
