//! Well-known names used when no explicit path is supplied.

use std::path::Path;

/// Default locations for a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPath {
    /// The manifest file (`Backup.parm`). Also the filename reported when
    /// the manifest is missing.
    Manifest,
    /// The primary root (`hd`, the local disk)
    Primary,
    /// The secondary root (`pen`, the removable drive)
    Secondary,
    /// The destination root (`backup-destino`)
    Destination,
}

impl DefaultPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "Backup.parm",
            Self::Primary => "hd",
            Self::Secondary => "pen",
            Self::Destination => "backup-destino",
        }
    }
}

impl AsRef<Path> for DefaultPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for DefaultPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DefaultPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
