use std::time::{Duration, UNIX_EPOCH};

use backup_core::{Direction, Freshness, Outcome, Presence, decide};
use backup_fs::FileStamp;
use proptest::prelude::*;

fn stamp() -> impl Strategy<Value = FileStamp> {
    prop_oneof![
        Just(FileStamp::Absent),
        (0u64..4).prop_map(|secs| FileStamp::Present {
            modified: UNIX_EPOCH + Duration::from_secs(secs),
        }),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Reverse)]
}

proptest! {
    #[test]
    fn decision_is_deterministic(d in direction(), p in stamp(), s in stamp()) {
        let first = decide(d, Presence::from_stamps(p, s));
        let second = decide(d, Presence::from_stamps(p, s));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn delete_is_never_produced(d in direction(), p in stamp(), s in stamp()) {
        prop_assert_ne!(decide(d, Presence::from_stamps(p, s)), Outcome::DeleteFromDest);
    }

    #[test]
    fn impossible_iff_both_absent(d in direction(), p in stamp(), s in stamp()) {
        let outcome = decide(d, Presence::from_stamps(p, s));
        prop_assert_eq!(outcome == Outcome::Impossible, !p.exists() && !s.exists());
    }

    #[test]
    fn copies_only_read_from_an_existing_authoritative_side(
        d in direction(), p in stamp(), s in stamp()
    ) {
        match decide(d, Presence::from_stamps(p, s)) {
            Outcome::CopyPrimaryToDest => {
                prop_assert_eq!(d, Direction::Forward);
                prop_assert!(p.exists());
            }
            Outcome::CopySecondaryToDest => {
                prop_assert_eq!(d, Direction::Reverse);
                prop_assert!(s.exists());
            }
            _ => {}
        }
    }

    #[test]
    fn equal_times_never_copy_or_conflict(d in direction(), secs in 0u64..1_000_000) {
        let at = FileStamp::Present { modified: UNIX_EPOCH + Duration::from_secs(secs) };
        let presence = Presence::from_stamps(at, at);
        prop_assert_eq!(presence, Presence::Both(Freshness::Same));
        prop_assert_eq!(decide(d, presence), Outcome::DoNothing);
    }
}
