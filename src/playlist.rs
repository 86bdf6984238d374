use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlaylistError;

/// File name suffixes picked up from a directory. Matching is case-sensitive.
pub const AUDIO_EXTENSIONS: [&str; 4] = [".mp3", ".wav", ".ogg", ".flac"];

/// Ordered, immutable list of tracks built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
}

impl Playlist {
    pub fn from_tracks(tracks: Vec<PathBuf>) -> Self {
        Self { tracks }
    }

    /// Builds the playlist from the configured source path.
    ///
    /// A file yields exactly one entry. A directory yields its audio files
    /// ordered by the integer value of their stem. Anything else yields an
    /// empty playlist.
    pub fn from_source(path: &Path) -> Result<Self, PlaylistError> {
        if path.is_file() {
            return Ok(Self::from_tracks(vec![path.to_path_buf()]));
        }
        if path.is_dir() {
            return scan_directory(path).map(Self::from_tracks);
        }

        tracing::warn!(path = %path.display(), "source path is neither a file nor a directory");
        Ok(Self::default())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.tracks.get(index).map(PathBuf::as_path)
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }
}

pub fn is_audio_file_name(name: &str) -> bool {
    AUDIO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn track_number(path: &Path) -> Option<i128> {
    path.file_stem()?.to_str()?.parse().ok()
}

fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, PlaylistError> {
    let read_err = |source| PlaylistError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut numbered = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        if !is_audio_file_name(name) {
            continue;
        }

        let Some(number) = track_number(&path) else {
            return Err(PlaylistError::NonNumericTrackName { path });
        };
        numbered.push((number, name.to_owned(), path));
    }

    numbered.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    Ok(numbered.into_iter().map(|(_, _, path)| path).collect())
}
