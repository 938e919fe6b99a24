//! Error types for backup-core

/// Result type for backup-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in backup-core operations.
///
/// Per-entry conditions (missing files, conflicts, failed copies) are never
/// errors; they are recorded in the report. Only caller misuse and failures
/// that prevent the whole run end up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required path argument was empty
    #[error("Required argument '{name}' is empty")]
    EmptyArgument { name: &'static str },

    /// Unrecognized direction name
    #[error("Invalid direction: {value} (expected 'backup' or 'restore')")]
    InvalidDirection { value: String },

    /// Integer outside the 1-6 outcome code range
    #[error("Invalid outcome code: {code}")]
    InvalidOutcomeCode { code: u8 },

    /// Filesystem error from backup-fs
    #[error(transparent)]
    Fs(#[from] backup_fs::Error),
}
