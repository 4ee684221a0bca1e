use std::path::PathBuf;
use std::time::Duration;

/// Sentinel used by the underlying index when a tag field is not set.
/// The display layer normalizes it to a readable placeholder.
pub const UNKNOWN_SENTINEL: &str = "<unknown>";

/// One playable entry from the library index. Immutable once read.
#[derive(Clone, Debug)]
pub struct Track {
    /// Opaque locator resolvable by the audio backend.
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

/// A point-in-time, immutable listing of library entries.
///
/// The count is fixed for the snapshot's lifetime; there are no live
/// updates.
#[derive(Debug, Default)]
pub struct LibrarySnapshot {
    tracks: Vec<Track>,
}

impl LibrarySnapshot {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
