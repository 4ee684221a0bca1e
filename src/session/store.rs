use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::model::{UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE};

/// The single flat record that outlives the process: the last displayed
/// metadata plus the locator of the last loaded track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSession {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub locator: Option<PathBuf>,
}

impl Default for PersistedSession {
    fn default() -> Self {
        Self {
            artist: UNKNOWN_ARTIST.to_string(),
            title: UNKNOWN_TITLE.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
            locator: None,
        }
    }
}

/// Persists the last-known display metadata and locator across runs.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Overwrite the stored record unconditionally.
    pub fn save(&self, record: &PersistedSession) -> io::Result<()> {
        let body = toml::to_string(record).map_err(io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, body)
    }

    /// Read the stored record, falling back to placeholder defaults when
    /// no prior record exists or it cannot be parsed. Repeated loads
    /// without an intervening save return identical results.
    pub fn load(&self) -> PersistedSession {
        match fs::read_to_string(&self.path) {
            Ok(body) => toml::from_str(&body).unwrap_or_else(|err| {
                tracing::warn!(
                    %err,
                    path = %self.path.display(),
                    "invalid session record, using defaults"
                );
                PersistedSession::default()
            }),
            Err(_) => PersistedSession::default(),
        }
    }
}

/// Compute the default session record path under
/// `$XDG_DATA_HOME/rondo/session.toml` or `~/.local/share/rondo/session.toml`.
pub fn default_state_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("session.toml"))
}

/// App-private data directory, following the same XDG conventions as the
/// config loader.
pub(crate) fn data_dir() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("rondo"))
}
