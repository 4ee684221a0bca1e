//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive library
//! scanning, session persistence and the UI, plus helpers to load
//! configuration from disk.

mod load;
mod schema;

pub use schema::*;
