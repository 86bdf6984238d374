use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::audio::AudioBackend;
use crate::error::AudioError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Play(PathBuf, u64),
    Stop,
    SetVolume(f32),
}

/// Backend double that records every call and can be told to reject tracks.
#[derive(Debug, Clone)]
pub(crate) struct RecordingBackend {
    pub(crate) calls: Arc<Mutex<Vec<Call>>>,
    failing: HashSet<PathBuf>,
    busy: bool,
    busy_after_play: bool,
    polled: bool,
    volume: f32,
}

impl RecordingBackend {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::default(),
            failing: HashSet::new(),
            busy: false,
            busy_after_play: true,
            polled: false,
            volume: 1.0,
        }
    }

    pub(crate) fn failing(mut self, tracks: &[&str]) -> Self {
        self.failing = tracks.iter().map(PathBuf::from).collect();
        self
    }

    /// Completion is only visible through `is_busy`, and every track ends at once.
    pub(crate) fn polled_instant_tracks(mut self) -> Self {
        self.polled = true;
        self.busy_after_play = false;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn played(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Play(p, _) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl AudioBackend for RecordingBackend {
    fn play(&mut self, track: &Path, play_id: u64) -> Result<(), AudioError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Play(track.to_path_buf(), play_id));
        if self.failing.contains(track) {
            self.busy = false;
            return Err(AudioError::Decode {
                path: track.to_path_buf(),
                source: "corrupt".into(),
            });
        }
        self.busy = self.busy_after_play;
        Ok(())
    }

    fn stop(&mut self) {
        self.busy = false;
        self.calls.lock().unwrap().push(Call::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.calls.lock().unwrap().push(Call::SetVolume(volume));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn notifies_completion(&self) -> bool {
        !self.polled
    }
}
