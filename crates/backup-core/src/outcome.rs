//! Outcome codes and reconciliation direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which root is authoritative for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Backup: primary is authoritative, copies flow primary → destination.
    #[default]
    Forward,
    /// Restore: secondary is authoritative, copies flow secondary → destination.
    Reverse,
}

impl Direction {
    /// Map the boolean "forward" flag of the invocation contract.
    pub fn from_forward(forward: bool) -> Self {
        if forward { Self::Forward } else { Self::Reverse }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "backup" => Ok(Self::Forward),
            "reverse" | "restore" => Ok(Self::Reverse),
            _ => Err(Error::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "backup"),
            Self::Reverse => write!(f, "restore"),
        }
    }
}

/// One of the two source roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Primary,
    Secondary,
}

/// Decision for one manifest entry.
///
/// Serialized as its integer code (1-6), the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    /// 1: copy primary → destination
    CopyPrimaryToDest,
    /// 2: copy secondary → destination
    CopySecondaryToDest,
    /// 3: remove the destination copy.
    ///
    /// Reserved for a symmetric sync mode. No rule produces it today.
    DeleteFromDest,
    /// 4: nothing to do
    DoNothing,
    /// 5: the authoritative side is older than the other side
    Conflict,
    /// 6: no source exists (or the manifest itself is missing)
    Impossible,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Self::CopyPrimaryToDest,
        Self::CopySecondaryToDest,
        Self::DeleteFromDest,
        Self::DoNothing,
        Self::Conflict,
        Self::Impossible,
    ];

    pub fn code(&self) -> u8 {
        match self {
            Self::CopyPrimaryToDest => 1,
            Self::CopySecondaryToDest => 2,
            Self::DeleteFromDest => 3,
            Self::DoNothing => 4,
            Self::Conflict => 5,
            Self::Impossible => 6,
        }
    }

    pub fn from_code(code: u8) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.code() == code)
            .ok_or(Error::InvalidOutcomeCode { code })
    }

    /// The root a copy reads from, if this outcome copies at all.
    pub fn source(&self) -> Option<Side> {
        match self {
            Self::CopyPrimaryToDest => Some(Side::Primary),
            Self::CopySecondaryToDest => Some(Side::Secondary),
            Self::DeleteFromDest | Self::DoNothing | Self::Conflict | Self::Impossible => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CopyPrimaryToDest => "copy_primary_to_dest",
            Self::CopySecondaryToDest => "copy_secondary_to_dest",
            Self::DeleteFromDest => "delete_from_dest",
            Self::DoNothing => "do_nothing",
            Self::Conflict => "conflict",
            Self::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = Error;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
