use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{LibrarySnapshot, Track};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` and capture a snapshot of every audio file found, ordered
/// by path.
///
/// Tag reading is best-effort: a file whose tags cannot be read falls
/// back to its file stem as the title, with no artist or album.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> LibrarySnapshot {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            let default_title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string();

            let mut title = default_title;
            let mut artist: Option<String> = None;
            let mut album: Option<String> = None;
            let mut duration: Option<Duration> = None;

            if let Ok(tagged) = lofty::read_from_path(path) {
                duration = Some(tagged.properties().duration());

                if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                    if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                        if !v.trim().is_empty() {
                            title = v.to_string();
                        }
                    }
                    if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                        let v = v.trim();
                        if !v.is_empty() {
                            artist = Some(v.to_string());
                        }
                    }
                    if let Some(v) = tag.get_string(&ItemKey::AlbumTitle) {
                        let v = v.trim();
                        if !v.is_empty() {
                            album = Some(v.to_string());
                        }
                    }
                }
            }

            tracks.push(Track {
                path: path.to_path_buf(),
                title,
                artist,
                album,
                duration,
            });
        }
    }

    tracks.sort_by(|a, b| a.path.cmp(&b.path));
    LibrarySnapshot::new(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_filters_non_audio_and_orders_by_path() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("a.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let snapshot = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.tracks()[0].title, "a");
        assert_eq!(snapshot.tracks()[1].title, "b");
    }

    #[test]
    fn scan_falls_back_to_file_stem_when_tags_unreadable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("untitled.mp3"), b"not a real mp3").unwrap();

        let snapshot = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(snapshot.len(), 1);
        let track = &snapshot.tracks()[0];
        assert_eq!(track.title, "untitled");
        assert_eq!(track.artist, None);
        assert_eq!(track.album, None);
    }

    #[test]
    fn scan_skips_hidden_files_by_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let snapshot = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.tracks()[0].title, "visible");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let snapshot = scan(dir.path(), &settings);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.tracks()[0].title, "root");
    }

    #[test]
    fn scan_respects_max_depth() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2...
        // With max_depth=2 we should see root + d1/*, but not d1/d2/*.
        let settings = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let snapshot = scan(dir.path(), &settings);

        let names: Vec<&str> = snapshot.tracks().iter().map(|t| t.title.as_str()).collect();
        assert!(names.contains(&"root"));
        assert!(names.contains(&"one"));
        assert!(!names.contains(&"two"));
    }

    #[test]
    fn snapshot_count_is_fixed_after_capture() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("first.mp3"), b"not real").unwrap();

        let snapshot = scan(dir.path(), &LibrarySettings::default());
        fs::write(dir.path().join("second.mp3"), b"not real").unwrap();

        assert_eq!(snapshot.len(), 1);
    }
}
