//! Playlist construction errors

use std::path::PathBuf;

/// Errors raised while scanning the configured source path
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// Directory could not be listed
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Audio file whose name is not an integer, so it cannot be ordered
    #[error(
        "audio file {} must be named with an integer (e.g. 1.mp3, 2.flac) to be ordered",
        path.display()
    )]
    NonNumericTrackName { path: PathBuf },
}
