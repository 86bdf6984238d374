use std::path::{Path, PathBuf};

use super::AudioBackend;
use crate::error::AudioError;

/// Silent backend for machines without an output device.
///
/// A loaded track "plays" until it is replaced or stopped, so hotkeys can be
/// exercised end to end without sound.
#[derive(Debug)]
pub struct NullBackend {
    current: Option<PathBuf>,
    volume: f32,
}

impl NullBackend {
    pub fn new() -> Self {
        Self {
            current: None,
            volume: 1.0,
        }
    }
}

impl Default for NullBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for NullBackend {
    fn play(&mut self, track: &Path, play_id: u64) -> Result<(), AudioError> {
        tracing::debug!(play_id, track = %track.display(), "null backend: play");
        self.current = Some(track.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.current = None;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}
