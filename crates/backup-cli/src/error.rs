//! Error types for backup-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from backup-core
    #[error(transparent)]
    Core(#[from] backup_core::Error),

    /// Error from backup-fs
    #[error(transparent)]
    Fs(#[from] backup_fs::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging setup error
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
