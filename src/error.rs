//! Error taxonomy for the playback session.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the playback session.
///
/// None of these are fatal to the process: every variant leaves the
/// session in a well-defined state with the controls usable again.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Access to the music library has not been granted.
    #[error("access to the music library was denied")]
    AccessDenied,

    /// The library snapshot contained no playable tracks.
    #[error("the music library has no playable tracks")]
    EmptyLibrary,

    /// A locator could not be opened by the audio backend.
    #[error("could not open {}: {reason}", locator.display())]
    SourceUnavailable { locator: PathBuf, reason: String },

    /// Play/pause was requested before any track was ever picked.
    /// Guidance rather than a real fault.
    #[error("pick a random track first")]
    NoTrackSelected,
}
