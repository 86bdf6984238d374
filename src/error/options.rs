//! Options file errors

use std::path::PathBuf;

/// Reasons the options file cannot be used; all of them abort startup
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// File is missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON or lacks a required key
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Volume outside `[0.0, 1.0]` or not a finite number
    #[error("volume must be within 0.0..=1.0, got {0}")]
    InvalidVolume(f32),
}
