//! Engine-facing small types: states, commands and readiness events.

use std::path::PathBuf;

/// States of the playback side of a session.
///
/// `Idle -> Preparing -> Ready -> {Playing <-> Paused}`, back to `Idle`
/// on reset, with `Error` reachable when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Preparing,
    Ready,
    Playing,
    Paused,
    Error,
}

/// Commands accepted by the engine thread.
#[derive(Debug)]
pub(crate) enum EngineCmd {
    /// Open and decode `locator`, answering with one readiness event
    /// tagged with `generation`.
    Load { locator: PathBuf, generation: u64 },
    /// Start audible output of the loaded source.
    Play,
    /// Stop audible output, keeping the position.
    Pause,
    /// Discard the loaded source.
    Reset,
    /// Quit the engine thread.
    Quit,
}

/// Readiness notifications produced by the engine thread.
///
/// Exactly one event is sent per `Load`: either `Ready` or `Failed`,
/// never both, never zero.
#[derive(Debug)]
pub enum EngineEvent {
    Ready { generation: u64 },
    Failed { generation: u64, reason: String },
}

impl EngineEvent {
    pub(crate) fn generation(&self) -> u64 {
        match self {
            Self::Ready { generation } | Self::Failed { generation, .. } => *generation,
        }
    }
}
