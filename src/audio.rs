//! Playback engine: wraps one rodio decode/output unit behind a small
//! prepare/play/pause state machine.
//!
//! `load()` is asynchronous: the engine thread answers with exactly one
//! readiness event per load, delivered on a channel the control context
//! polls. Events are tagged with a load generation so a superseded
//! load's answer is discarded instead of completing the wrong load.

mod engine;
mod thread;
mod types;

pub use engine::PlaybackEngine;
pub use types::{EngineEvent, PlayerState};

pub(crate) use types::EngineCmd;
