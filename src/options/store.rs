use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::OptionsError;

pub const OPTIONS_FILE: &str = "options.json";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
const MIN_POLL_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackOptions {
    /// Single audio file, or a directory of integer-named tracks
    pub path: PathBuf,
    pub volume: f32,

    // only used when the audio backend cannot report track completion itself
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl PlaybackOptions {
    pub fn new(path: impl Into<PathBuf>, volume: f32) -> Self {
        Self {
            path: path.into(),
            volume,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(OptionsError::InvalidVolume(self.volume));
        }
        Ok(())
    }
}

pub fn load_options(path: &Path) -> Result<PlaybackOptions, OptionsError> {
    let bytes = fs::read(path).map_err(|source| OptionsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options: PlaybackOptions =
        serde_json::from_slice(&bytes).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    options.validate()?;
    Ok(options)
}

/// Picks the options file: explicit override, then `./options.json`, then the
/// per-user config dir, falling back to `./options.json` so the error names it.
pub fn resolve_options_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(p) = explicit {
        return p;
    }

    let local = PathBuf::from(OPTIONS_FILE);
    if local.is_file() {
        return local;
    }

    if let Some(dirs) = ProjectDirs::from("", "", "hotkey-player") {
        let p = dirs.config_dir().join(OPTIONS_FILE);
        if p.is_file() {
            return p;
        }
    }

    local
}
