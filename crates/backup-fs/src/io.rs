//! Atomic I/O operations with file locking

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self as stdio, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Durability knobs for atomic writes and copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Flush the temp file to disk before renaming it into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self { enable_fsync: true }
    }
}

/// Temp file living next to its target, so the final rename never crosses
/// a filesystem boundary. Removed on drop unless it was persisted.
struct TempSibling {
    path: PathBuf,
    persisted: bool,
}

impl TempSibling {
    fn for_target(target: &Path) -> Self {
        let mut temp_name = OsString::from(".");
        temp_name.push(target.file_name().unwrap_or_default());
        temp_name.push(format!(".{}.tmp", std::process::id()));
        Self {
            path: target.with_file_name(temp_name),
            persisted: false,
        }
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))
    }

    fn persist(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target).map_err(|e| Error::io(target, e))?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TempSibling {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn ensure_parent(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Fill a locked temp sibling of `target` via `fill`, then rename it over
/// `target`. Returns whatever `fill` returned.
fn replace_atomic<T>(
    target: &Path,
    config: RobustnessConfig,
    fill: impl FnOnce(&mut File, &Path) -> Result<T>,
) -> Result<T> {
    ensure_parent(target)?;

    let temp = TempSibling::for_target(target);
    let mut temp_file = temp.open()?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.to_path_buf(),
        })?;

    let value = fill(&mut temp_file, &temp.path)?;

    if config.enable_fsync {
        temp_file
            .sync_all()
            .map_err(|e| Error::io(&temp.path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    drop(temp_file);

    temp.persist(target)?;
    Ok(value)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
pub fn write_atomic(
    path: &NormalizedPath,
    content: &[u8],
    config: RobustnessConfig,
) -> Result<()> {
    replace_atomic(&path.to_native(), config, |file, temp_path| {
        file.write_all(content).map_err(|e| Error::io(temp_path, e))
    })
}

/// Copy `source` over `destination`, replacing any existing file.
///
/// The destination's parent directories are created as needed. On failure
/// the previous destination content, if any, is left untouched.
/// Returns the number of bytes copied.
pub fn copy_atomic(
    source: &NormalizedPath,
    destination: &NormalizedPath,
    config: RobustnessConfig,
) -> Result<u64> {
    let source_native = source.to_native();
    let mut reader = File::open(&source_native).map_err(|e| Error::io(&source_native, e))?;

    let bytes = replace_atomic(&destination.to_native(), config, |file, temp_path| {
        stdio::copy(&mut reader, file).map_err(|e| Error::io(temp_path, e))
    })?;

    tracing::trace!(
        source = %source,
        destination = %destination,
        bytes,
        "Copied file"
    );
    Ok(bytes)
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
