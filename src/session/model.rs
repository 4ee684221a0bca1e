use std::path::PathBuf;

use crate::audio::PlayerState;
use crate::library::{Track, UNKNOWN_SENTINEL};

pub const UNKNOWN_ARTIST: &str = "Unknown artist";
pub const UNKNOWN_TITLE: &str = "Unknown title";
pub const UNKNOWN_ALBUM: &str = "Unknown album";

/// The three read-only text fields shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMetadata {
    pub artist: String,
    pub title: String,
    pub album: String,
}

impl Default for DisplayMetadata {
    fn default() -> Self {
        Self {
            artist: UNKNOWN_ARTIST.to_string(),
            title: UNKNOWN_TITLE.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
        }
    }
}

impl DisplayMetadata {
    /// Build display strings from a library track, normalizing the index's
    /// "unknown" sentinel and missing tags to readable placeholders.
    pub fn from_track(track: &Track) -> Self {
        Self {
            artist: normalize(track.artist.as_deref(), UNKNOWN_ARTIST),
            title: normalize(Some(&track.title), UNKNOWN_TITLE),
            album: normalize(track.album.as_deref(), UNKNOWN_ALBUM),
        }
    }
}

fn normalize(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && v != UNKNOWN_SENTINEL => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Mutable session state, exclusively owned by `SessionController` and
/// mutated only on the control context.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    pub metadata: DisplayMetadata,
    /// Locator of the currently loaded track, if any.
    pub current: Option<PathBuf>,
    pub state: PlayerState,
    /// Whether the pick and toggle affordances are active.
    /// Always false while the state is `Idle` or `Preparing`.
    pub controls_enabled: bool,
    /// Latest transient user-facing message.
    pub notice: Option<String>,
}
