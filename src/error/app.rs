//! Application level errors

use super::{AudioError, HotkeyError, OptionsError, PlaylistError};

/// Top level error returned by the binary
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file could not be used
    #[error("options error: {0}")]
    Options(#[from] OptionsError),

    /// Playlist could not be built
    #[error("playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    /// Audio output error
    #[error("audio error: {0}")]
    Audio(#[from] AudioError),

    /// Global hotkeys could not be installed
    #[error("hotkey error: {0}")]
    Hotkey(#[from] HotkeyError),

    /// Host OS is neither Windows nor Linux
    #[error("unsupported OS: {0}")]
    UnsupportedPlatform(String),
}
