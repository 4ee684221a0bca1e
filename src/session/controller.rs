use crate::audio::{EngineEvent, PlaybackEngine, PlayerState};
use crate::error::PlayerError;
use crate::library::{self, LibraryGate};

use super::model::{DisplayMetadata, PlaybackSession};
use super::store::{PersistedSession, SessionStore};

/// Orchestrates the gate, picker, engine and store.
///
/// Every operation runs on the single control context; the engine's
/// readiness events are pulled in via [`SessionController::poll_engine`].
pub struct SessionController {
    gate: LibraryGate,
    engine: PlaybackEngine,
    store: SessionStore,
    session: PlaybackSession,
}

impl SessionController {
    pub fn new(gate: LibraryGate, engine: PlaybackEngine, store: SessionStore) -> Self {
        Self {
            gate,
            engine,
            store,
            session: PlaybackSession::default(),
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Pick a random track from the library and start preparing it.
    ///
    /// Controls are disabled for the whole flow and re-enabled exactly
    /// once: here when the flow aborts, or by the readiness event when
    /// the load completes.
    pub fn select_random(&mut self) {
        if self.session.state == PlayerState::Preparing {
            return; // at most one outstanding load
        }
        let prior = self.session.state;
        self.session.controls_enabled = false;

        let snapshot = match self.gate.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => return self.abort_selection(prior, err),
        };
        let track = match library::pick(&snapshot) {
            Ok(track) => track.clone(),
            Err(err) => return self.abort_selection(prior, err),
        };

        tracing::info!(locator = %track.path.display(), "picked random track");
        self.session.metadata = DisplayMetadata::from_track(&track);
        self.session.current = Some(track.path.clone());
        self.session.notice = None;
        self.engine.reset();
        self.engine.load(&track.path);
        self.session.state = PlayerState::Preparing;
    }

    /// Toggle between playing and paused.
    pub fn toggle(&mut self) {
        if self.session.current.is_none() {
            // Not a fault: guide the user instead.
            self.session.notice = Some(PlayerError::NoTrackSelected.to_string());
            return;
        }
        match self.session.state {
            PlayerState::Playing => {
                self.engine.pause();
                self.session.state = PlayerState::Paused;
            }
            PlayerState::Ready | PlayerState::Paused => {
                self.engine.play();
                self.session.state = PlayerState::Playing;
            }
            // Preparing, Idle or Error: nothing sensible to toggle.
            _ => {}
        }
    }

    /// Re-prime the session from the persisted record.
    ///
    /// A restored track is loaded paused and never auto-plays, regardless
    /// of whether it was playing when the session was suspended. Controls
    /// follow readiness: disabled while the load is in flight, enabled by
    /// its readiness event.
    pub fn restore(&mut self) {
        let record = self.store.load();
        self.session.metadata = DisplayMetadata {
            artist: record.artist,
            title: record.title,
            album: record.album,
        };
        self.session.current = record.locator;
        self.engine.reset();
        self.session.state = PlayerState::Idle;
        self.session.controls_enabled = false;

        if let Some(locator) = self.session.current.clone() {
            self.engine.load(&locator);
            self.session.state = PlayerState::Preparing;
        }
    }

    /// Persist the current display metadata and locator, unconditionally:
    /// with no track ever loaded this writes the placeholders and no
    /// locator.
    pub fn suspend(&self) {
        let record = PersistedSession {
            artist: self.session.metadata.artist.clone(),
            title: self.session.metadata.title.clone(),
            album: self.session.metadata.album.clone(),
            locator: self.session.current.clone(),
        };
        if let Err(err) = self.store.save(&record) {
            tracing::warn!(%err, "failed to persist session");
        }
    }

    /// Apply any pending readiness events from the engine.
    pub fn poll_engine(&mut self) {
        while let Some(event) = self.engine.poll() {
            match event {
                EngineEvent::Ready { .. } => {
                    // Never auto-play a freshly loaded track.
                    self.session.state = PlayerState::Paused;
                    self.session.controls_enabled = true;
                }
                EngineEvent::Failed { reason, .. } => {
                    let locator = self.session.current.take().unwrap_or_default();
                    let err = PlayerError::SourceUnavailable { locator, reason };
                    tracing::warn!(%err, "load failed");
                    self.session.notice = Some(err.to_string());
                    self.engine.reset();
                    self.session.state = PlayerState::Error;
                    self.session.controls_enabled = true;
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }

    fn abort_selection(&mut self, prior: PlayerState, err: PlayerError) {
        tracing::warn!(%err, "random pick aborted");
        self.session.notice = Some(err.to_string());
        self.session.controls_enabled = true;
        // With a track still loaded the session keeps its prior state;
        // otherwise it parks in Error with nothing active.
        self.session.state = if self.session.current.is_some() {
            prior
        } else {
            PlayerState::Error
        };
    }
}
