//! The decision table
//!
//! Classification happens in two steps. First the two [`FileStamp`]s are
//! folded into a [`Presence`], which only carries a time comparison when
//! both files exist. Then [`decide`] looks the `(direction, presence)` pair
//! up in a single exhaustive match, one arm per table row.
//!
//! | direction | primary | secondary | time               | outcome                  |
//! |-----------|---------|-----------|--------------------|--------------------------|
//! | forward   | yes     | no        |                    | `CopyPrimaryToDest`      |
//! | forward   | yes     | yes       | primary newer      | `CopyPrimaryToDest`      |
//! | forward   | yes     | yes       | secondary newer    | `Conflict`               |
//! | forward   | yes     | yes       | same               | `DoNothing`              |
//! | forward   | no      | yes       |                    | `DoNothing`              |
//! | forward   | no      | no        |                    | `Impossible`             |
//! | reverse   | no      | yes       |                    | `CopySecondaryToDest`    |
//! | reverse   | yes     | yes       | secondary newer    | `CopySecondaryToDest`    |
//! | reverse   | yes     | yes       | same               | `DoNothing`              |
//! | reverse   | yes     | yes       | primary newer      | `DoNothing`              |
//! | reverse   | yes     | no        |                    | `DoNothing`              |
//! | reverse   | no      | no        |                    | `Impossible`             |
//!
//! A forward run never pulls from the secondary root, even when only the
//! secondary copy exists.

use std::cmp::Ordering;
use std::time::SystemTime;

use backup_fs::FileStamp;

use crate::outcome::{Direction, Outcome};

/// Strict comparison of the two modification times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Freshness {
    PrimaryNewer,
    SecondaryNewer,
    Same,
}

impl Freshness {
    pub fn compare(primary: SystemTime, secondary: SystemTime) -> Self {
        match primary.cmp(&secondary) {
            Ordering::Greater => Self::PrimaryNewer,
            Ordering::Less => Self::SecondaryNewer,
            Ordering::Equal => Self::Same,
        }
    }
}

/// Which roots hold the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Neither,
    PrimaryOnly,
    SecondaryOnly,
    Both(Freshness),
}

impl Presence {
    pub fn from_stamps(primary: FileStamp, secondary: FileStamp) -> Self {
        match (primary, secondary) {
            (FileStamp::Absent, FileStamp::Absent) => Self::Neither,
            (FileStamp::Present { .. }, FileStamp::Absent) => Self::PrimaryOnly,
            (FileStamp::Absent, FileStamp::Present { .. }) => Self::SecondaryOnly,
            (FileStamp::Present { modified: p }, FileStamp::Present { modified: s }) => {
                Self::Both(Freshness::compare(p, s))
            }
        }
    }
}

/// Look up the outcome for one entry.
///
/// Pure: the same arguments always yield the same outcome.
/// [`Outcome::DeleteFromDest`] is never returned.
pub fn decide(direction: Direction, presence: Presence) -> Outcome {
    use Direction::{Forward, Reverse};
    use Freshness::{PrimaryNewer, Same, SecondaryNewer};
    use Presence::{Both, Neither, PrimaryOnly, SecondaryOnly};

    match (direction, presence) {
        (Forward, PrimaryOnly) => Outcome::CopyPrimaryToDest,
        (Forward, Both(PrimaryNewer)) => Outcome::CopyPrimaryToDest,
        (Forward, Both(SecondaryNewer)) => Outcome::Conflict,
        (Forward, Both(Same)) => Outcome::DoNothing,
        (Forward, SecondaryOnly) => Outcome::DoNothing,
        (Forward, Neither) => Outcome::Impossible,

        (Reverse, SecondaryOnly) => Outcome::CopySecondaryToDest,
        (Reverse, Both(SecondaryNewer)) => Outcome::CopySecondaryToDest,
        (Reverse, Both(Same)) => Outcome::DoNothing,
        (Reverse, Both(PrimaryNewer)) => Outcome::DoNothing,
        (Reverse, PrimaryOnly) => Outcome::DoNothing,
        (Reverse, Neither) => Outcome::Impossible,
    }
}
