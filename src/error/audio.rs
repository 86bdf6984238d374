//! Audio backend errors

use std::path::PathBuf;

/// Errors raised while opening the output device or loading a track
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// Default output stream could not be opened
    #[error("failed to open audio output: {0}")]
    OutputStream(String),

    /// Track file could not be opened
    #[error("failed to open audio file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Track could not be decoded
    #[error("failed to decode audio file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// End-of-track watcher thread could not be started
    #[error("failed to spawn end-of-track watcher: {0}")]
    Spawn(#[source] std::io::Error),
}

impl AudioError {
    /// Whether the failure is tied to one track, so skipping it may help
    pub fn is_track_specific(&self) -> bool {
        matches!(self, AudioError::OpenFile { .. } | AudioError::Decode { .. })
    }
}
