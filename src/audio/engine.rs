use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use super::thread::spawn_engine_thread;
use super::types::{EngineCmd, EngineEvent, PlayerState};

/// Front half of the playback engine, owned by the control context.
///
/// Owns the engine thread, the command channel into it, the readiness
/// channel out of it, and the externally observable state machine. At
/// most one load is outstanding at a time; callers enforce that by
/// disabling whatever could trigger a second one while `Preparing`.
pub struct PlaybackEngine {
    tx: Sender<EngineCmd>,
    events: Receiver<EngineEvent>,
    state: PlayerState,
    generation: u64,
    join: Option<JoinHandle<()>>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let (event_tx, events) = mpsc::channel();
        let join = spawn_engine_thread(rx, event_tx);
        Self {
            tx,
            events,
            state: PlayerState::Idle,
            generation: 0,
            join: Some(join),
        }
    }

    /// Build an engine wired to caller-held channels instead of a thread,
    /// so tests can observe commands and inject readiness events.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, Receiver<EngineCmd>, Sender<EngineEvent>) {
        let (tx, rx) = mpsc::channel();
        let (event_tx, events) = mpsc::channel();
        let engine = Self {
            tx,
            events,
            state: PlayerState::Idle,
            generation: 0,
            join: None,
        };
        (engine, rx, event_tx)
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Begin loading `locator`. The engine moves to `Preparing` and will
    /// answer later with exactly one readiness event for this load.
    pub fn load(&mut self, locator: &Path) {
        self.generation += 1;
        self.state = PlayerState::Preparing;
        self.send(EngineCmd::Load {
            locator: locator.to_path_buf(),
            generation: self.generation,
        });
    }

    /// Start audible output. Valid from `Ready` or `Paused`; otherwise a
    /// no-op.
    pub fn play(&mut self) {
        if matches!(self.state, PlayerState::Ready | PlayerState::Paused) {
            self.send(EngineCmd::Play);
            self.state = PlayerState::Playing;
        }
    }

    /// Stop audible output, preserving the position. Valid from `Playing`;
    /// otherwise a no-op.
    pub fn pause(&mut self) {
        if self.state == PlayerState::Playing {
            self.send(EngineCmd::Pause);
            self.state = PlayerState::Paused;
        }
    }

    /// Discard the loaded source and return to `Idle`. Valid from any state.
    pub fn reset(&mut self) {
        self.send(EngineCmd::Reset);
        self.state = PlayerState::Idle;
    }

    /// Drain the readiness channel and apply the first event belonging to
    /// the current load. Events from superseded loads are dropped.
    pub fn poll(&mut self) -> Option<EngineEvent> {
        while let Ok(event) = self.events.try_recv() {
            if event.generation() != self.generation {
                continue; // superseded by a newer load
            }
            match &event {
                EngineEvent::Ready { .. } => {
                    if self.state == PlayerState::Preparing {
                        self.state = PlayerState::Ready;
                    }
                }
                EngineEvent::Failed { .. } => {
                    self.state = PlayerState::Error;
                }
            }
            return Some(event);
        }
        None
    }

    /// Stop playback and join the engine thread.
    pub fn shutdown(&mut self) {
        let _ = self.tx.send(EngineCmd::Quit);
        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }

    fn send(&self, cmd: EngineCmd) {
        if self.tx.send(cmd).is_err() {
            tracing::warn!("engine thread is gone; command dropped");
        }
    }
}
