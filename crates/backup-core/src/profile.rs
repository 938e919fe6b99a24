//! Run profiles
//!
//! A profile names the manifest, the three roots and the direction of a
//! run. Profiles are loaded from TOML, JSON or YAML and layered: a later
//! layer (typically command-line flags) overrides any field it sets, and
//! fields nobody sets fall back to the [`DefaultPath`] names.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use backup_fs::{ConfigStore, DefaultPath, NormalizedPath};

use crate::Result;
use crate::outcome::Direction;
use crate::reconcile::ReconcileRequest;

/// Partial description of a run. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Profile {
    /// Load a profile, picking the format from the file extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let profile: Profile = ConfigStore::new().load(path)?;
        tracing::debug!(profile = %path, "Loaded profile");
        Ok(profile)
    }

    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        Ok(())
    }

    /// Layer `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: Profile) -> Profile {
        Profile {
            manifest: overrides.manifest.or(self.manifest),
            primary: overrides.primary.or(self.primary),
            secondary: overrides.secondary.or(self.secondary),
            destination: overrides.destination.or(self.destination),
            direction: overrides.direction.or(self.direction),
        }
    }

    /// Resolve into a request, filling unset fields with the defaults.
    pub fn into_request(self) -> ReconcileRequest {
        let or_default = |value: Option<PathBuf>, default: DefaultPath| {
            value.unwrap_or_else(|| PathBuf::from(default.as_str()))
        };

        ReconcileRequest::new(
            or_default(self.manifest, DefaultPath::Manifest),
            or_default(self.primary, DefaultPath::Primary),
            or_default(self.secondary, DefaultPath::Secondary),
            or_default(self.destination, DefaultPath::Destination),
            self.direction.unwrap_or_default(),
        )
    }
}
