//! save-profile command implementation

use std::path::Path;

use colored::Colorize;

use backup_core::Direction;
use backup_fs::NormalizedPath;

use crate::cli::LocationArgs;
use crate::error::Result;

use super::resolve_profile;

/// Write the merged profile (existing profile file plus flags) to `path`.
pub fn run_save_profile(
    locations: &LocationArgs,
    path: &Path,
    direction: Option<Direction>,
) -> Result<()> {
    let profile = resolve_profile(locations, direction)?;
    let target = NormalizedPath::new(path);
    profile.save(&target)?;

    println!("{} Saved profile to {}", "OK".green().bold(), target.to_string().cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backup_core::Profile;
    use tempfile::TempDir;

    #[test]
    fn saved_profile_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nightly.yaml");
        let locations = LocationArgs {
            primary: Some("/mnt/hd".into()),
            destination: Some("/srv/backup".into()),
            ..Default::default()
        };

        run_save_profile(&locations, &path, Some(Direction::Reverse)).unwrap();

        let loaded = Profile::load(&NormalizedPath::new(&path)).unwrap();
        assert_eq!(loaded.primary.as_deref(), Some(Path::new("/mnt/hd")));
        assert_eq!(loaded.destination.as_deref(), Some(Path::new("/srv/backup")));
        assert_eq!(loaded.direction, Some(Direction::Reverse));
        assert!(loaded.manifest.is_none());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nightly.ini");

        assert!(run_save_profile(&LocationArgs::default(), &path, None).is_err());
    }
}
