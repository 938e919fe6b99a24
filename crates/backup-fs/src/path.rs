//! Normalized path handling
//!
//! Paths are kept as platform-native [`PathBuf`]s so filenames that are not
//! valid UTF-8, or that contain bytes such as `\` or `:` on Unix, reach the
//! filesystem unchanged. Text conversion happens only for display.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// A path with redundant separators, trailing separators and interior `.`
/// components removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: PathBuf,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().components().collect(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.as_os_str().is_empty()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        self.inner.clone()
    }

    /// Join this path with a segment.
    ///
    /// An empty base yields the segment itself, so a relative root of `""`
    /// never turns an entry into an absolute `/entry` path.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        if self.is_empty() {
            Self::new(segment)
        } else {
            Self::new(self.inner.join(segment))
        }
    }

    /// Get the extension if present and valid UTF-8.
    pub fn extension(&self) -> Option<&str> {
        self.inner.extension().and_then(OsStr::to_str)
    }
}

/// Check that a manifest entry stays inside whatever root it is joined to.
///
/// Rejects absolute paths, platform prefixes (`C:`, `\\server\share`) and
/// any `..` component. Every other byte sequence is a valid relative name.
/// Returns a human-readable reason on rejection.
pub fn validate_entry_name(entry: impl AsRef<Path>) -> std::result::Result<(), String> {
    let entry = entry.as_ref();

    for component in entry.components() {
        match component {
            Component::Prefix(_) => {
                return Err(format!("Entry '{}' names a drive or share", entry.display()));
            }
            Component::RootDir => {
                return Err(format!("Entry '{}' is an absolute path", entry.display()));
            }
            Component::ParentDir => {
                return Err(format!("Entry '{}' escapes its root via '..'", entry.display()));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
