//! File existence and modification-time probing

use std::fs;
use std::io::ErrorKind;
use std::time::SystemTime;

use crate::NormalizedPath;

/// What the filesystem says about one candidate file.
///
/// A modification time only exists alongside presence, so callers can never
/// compare a time that belongs to a missing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStamp {
    Absent,
    Present { modified: SystemTime },
}

impl FileStamp {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    pub fn modified(&self) -> Option<SystemTime> {
        match self {
            Self::Present { modified } => Some(*modified),
            Self::Absent => None,
        }
    }
}

/// Probe `path` for a regular file.
///
/// Directories count as absent. Metadata that cannot be read (permissions,
/// platforms without mtime support) also counts as absent and is logged.
pub fn stamp(path: &NormalizedPath) -> FileStamp {
    let metadata = match fs::metadata(path.to_native()) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return FileStamp::Absent,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Cannot read metadata, treating as absent");
            return FileStamp::Absent;
        }
    };

    if !metadata.is_file() {
        tracing::debug!(path = %path, "Not a regular file, treating as absent");
        return FileStamp::Absent;
    }

    match metadata.modified() {
        Ok(modified) => FileStamp::Present { modified },
        Err(e) => {
            tracing::warn!(
                path = %path,
                error = %e,
                "Modification time unavailable, treating as absent"
            );
            FileStamp::Absent
        }
    }
}
