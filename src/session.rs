//! Playback session: display state, persistence and orchestration.
//!
//! `SessionController` is the only component with business logic; it
//! owns the `PlaybackSession` and drives the gate, picker, engine and
//! store from the single control context.

mod controller;
mod model;
mod store;

pub use controller::SessionController;
pub use model::{DisplayMetadata, PlaybackSession};
pub use store::{PersistedSession, SessionStore, default_state_path};

pub(crate) use store::data_dir;
