use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use crate::config::LibrarySettings;
use crate::error::PlayerError;

use super::model::LibrarySnapshot;
use super::scan::scan;

/// Which permission probe the gate uses. Resolved once at construction
/// so call sites never branch on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessProbe {
    /// Inspect the directory's permission bits (unix).
    PermissionBits,
    /// Attempt to list the directory (everything else).
    DirectoryListing,
}

impl AccessProbe {
    fn resolve() -> Self {
        if cfg!(unix) {
            Self::PermissionBits
        } else {
            Self::DirectoryListing
        }
    }

    fn check(self, root: &Path) -> bool {
        match self {
            Self::PermissionBits => probe_permission_bits(root),
            Self::DirectoryListing => probe_directory_listing(root),
        }
    }
}

#[cfg(unix)]
fn probe_permission_bits(root: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => meta.permissions().mode() & 0o444 != 0,
        _ => false,
    }
}

#[cfg(not(unix))]
fn probe_permission_bits(root: &Path) -> bool {
    probe_directory_listing(root)
}

fn probe_directory_listing(root: &Path) -> bool {
    fs::read_dir(root).is_ok()
}

/// Mediates access to the music directory behind a single capability.
pub struct LibraryGate {
    root: PathBuf,
    settings: LibrarySettings,
    probe: AccessProbe,
    granted: bool,
}

impl LibraryGate {
    pub fn new(root: PathBuf, settings: LibrarySettings) -> Self {
        Self {
            root,
            settings,
            probe: AccessProbe::resolve(),
            granted: false,
        }
    }

    pub fn has_access(&self) -> bool {
        self.granted
    }

    /// Run the permission probe. On the first successful grant, kicks off
    /// a log-only enumeration of the library in the background.
    pub fn request_access(&mut self) -> bool {
        if self.granted {
            return true;
        }
        if self.probe.check(&self.root) {
            self.granted = true;
            self.log_library_contents();
        } else {
            tracing::error!(root = %self.root.display(), "music library access denied");
        }
        self.granted
    }

    /// Capture an immutable snapshot of the library.
    pub fn snapshot(&self) -> Result<LibrarySnapshot, PlayerError> {
        if !self.granted {
            return Err(PlayerError::AccessDenied);
        }
        Ok(scan(&self.root, &self.settings))
    }

    // Diagnostic only: runs off the control context and never reports back.
    fn log_library_contents(&self) {
        let root = self.root.clone();
        let settings = self.settings.clone();
        thread::spawn(move || {
            let snapshot = scan(&root, &settings);
            for track in snapshot.tracks() {
                tracing::debug!(
                    artist = track.artist.as_deref().unwrap_or("-"),
                    album = track.album.as_deref().unwrap_or("-"),
                    title = %track.title,
                    duration_secs = track.duration.map(|d| d.as_secs()).unwrap_or(0),
                    "library entry"
                );
            }
            tracing::info!(
                count = snapshot.len(),
                root = %root.display(),
                "music library enumerated"
            );
        });
    }
}
