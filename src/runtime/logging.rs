use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::session::data_dir;

/// Initialize tracing output.
///
/// The TUI owns the terminal, so logs go to `rondo.log` in the app data
/// directory, falling back to stderr when that directory is unavailable.
/// Filtering follows `RONDO_LOG` (default `info`).
pub fn init() {
    let filter = EnvFilter::try_from_env("RONDO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = data_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("rondo.log"))
            .ok()
    });

    match log_file {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
