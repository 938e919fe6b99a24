//! Manifest reading
//!
//! A manifest is a plain text file with one filename per line. Both `\n`
//! and `\r\n` endings are accepted, blank lines are skipped and duplicates
//! are kept in place.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;

use crate::{Error, NormalizedPath, Result};

/// Split raw manifest bytes into entries, in file order.
///
/// Lines that are empty or contain only ASCII whitespace are dropped. The
/// remaining bytes are kept as-is, so an entry names exactly the file the
/// manifest author wrote, whatever its encoding.
pub fn parse_manifest(bytes: &[u8]) -> Vec<OsString> {
    bytes
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .map(entry_from_bytes)
        .collect()
}

#[cfg(unix)]
fn entry_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

// Filenames are UTF-16 here, so bytes that are not UTF-8 cannot name a file.
#[cfg(not(unix))]
fn entry_from_bytes(bytes: &[u8]) -> OsString {
    String::from_utf8_lossy(bytes).into_owned().into()
}

/// Read and parse the manifest at `path`.
///
/// # Errors
///
/// Returns [`Error::ManifestNotFound`] when nothing exists at `path`, and
/// [`Error::Io`] for any other read failure.
pub fn read_manifest(path: &NormalizedPath) -> Result<Vec<OsString>> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ManifestNotFound {
            path: native_path.clone(),
        },
        _ => Error::io(&native_path, e),
    })?;

    let entries = parse_manifest(&bytes);
    tracing::debug!(manifest = %path, entries = entries.len(), "Read manifest");
    Ok(entries)
}
