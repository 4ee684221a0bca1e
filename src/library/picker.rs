use rand::seq::IndexedRandom;

use crate::error::PlayerError;

use super::model::{LibrarySnapshot, Track};

/// Pick one track uniformly at random from `snapshot`.
///
/// Every call draws fresh: no weighting, no repeat avoidance, no seeding.
pub fn pick(snapshot: &LibrarySnapshot) -> Result<&Track, PlayerError> {
    snapshot
        .tracks()
        .choose(&mut rand::rng())
        .ok_or(PlayerError::EmptyLibrary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn track(name: &str) -> Track {
        Track {
            path: PathBuf::from(name),
            title: name.to_string(),
            artist: None,
            album: None,
            duration: None,
        }
    }

    #[test]
    fn pick_from_empty_snapshot_always_fails() {
        let snapshot = LibrarySnapshot::default();
        for _ in 0..10 {
            assert!(matches!(pick(&snapshot), Err(PlayerError::EmptyLibrary)));
        }
    }

    #[test]
    fn picked_track_is_always_a_member_of_the_snapshot() {
        let snapshot =
            LibrarySnapshot::new(vec![track("a.mp3"), track("b.mp3"), track("c.mp3")]);
        let members: HashSet<PathBuf> =
            snapshot.tracks().iter().map(|t| t.path.clone()).collect();

        for _ in 0..100 {
            let picked = pick(&snapshot).unwrap();
            assert!(members.contains(&picked.path));
        }
    }

    #[test]
    fn pick_reaches_every_track_eventually() {
        // No weighting, no history: over enough draws every entry shows up.
        let snapshot =
            LibrarySnapshot::new(vec![track("a.mp3"), track("b.mp3"), track("c.mp3")]);

        let mut seen: HashSet<PathBuf> = HashSet::new();
        for _ in 0..300 {
            seen.insert(pick(&snapshot).unwrap().path.clone());
        }
        assert_eq!(seen.len(), snapshot.len());
    }

    #[test]
    fn pick_from_single_track_snapshot_returns_it() {
        let snapshot = LibrarySnapshot::new(vec![track("only.mp3")]);
        assert_eq!(pick(&snapshot).unwrap().path, PathBuf::from("only.mp3"));
    }
}
