//! Command implementations for backup-cli

pub mod profile;
pub mod run;

pub use profile::run_save_profile;
pub use run::{run_plan, run_reconcile};

use backup_core::{Direction, Profile};
use backup_fs::NormalizedPath;

use crate::cli::LocationArgs;
use crate::error::Result;

/// Build the effective profile: the profile file (if any) with flags on top.
pub fn resolve_profile(locations: &LocationArgs, direction: Option<Direction>) -> Result<Profile> {
    let base = match &locations.profile {
        Some(path) => Profile::load(&NormalizedPath::new(path))?,
        None => Profile::default(),
    };

    let flags = Profile {
        manifest: locations.manifest.clone(),
        primary: locations.primary.clone(),
        secondary: locations.secondary.clone(),
        destination: locations.destination.clone(),
        direction,
    };

    Ok(base.merge(flags))
}

/// Parse an optional `backup`/`restore` argument.
pub fn parse_direction(value: Option<&str>) -> Result<Option<Direction>> {
    Ok(value.map(str::parse::<Direction>).transpose()?)
}
