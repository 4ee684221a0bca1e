//! Library access: gated scanning of the on-disk music index.
//!
//! The gate mediates access to the configured music directory behind a
//! single capability, the scanner captures immutable snapshots of it,
//! and the picker draws one track at random from a snapshot.

mod gate;
mod model;
mod picker;
mod scan;

pub use gate::LibraryGate;
pub use model::{LibrarySnapshot, Track, UNKNOWN_SENTINEL};
pub use picker::pick;
pub use scan::scan;
