//! Filesystem layer for the backup reconciler
//!
//! Everything the reconciler needs from the disk lives here: normalized
//! path handling, file stamps (existence plus modification time), manifest
//! reading, atomic overwrite copies and format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod manifest;
pub mod path;
pub mod probe;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::DefaultPath;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use manifest::{parse_manifest, read_manifest};
pub use path::{NormalizedPath, validate_entry_name};
pub use probe::{FileStamp, stamp};
