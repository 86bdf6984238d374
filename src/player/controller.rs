use std::path::Path;

use super::state::{Direction, PlaybackState};
use crate::audio::AudioBackend;
use crate::playlist::Playlist;

/// Playback state machine over a fixed playlist.
///
/// `Idle --start--> Playing`, `Playing --track ended--> Playing` (cursor +1),
/// `Playing --advance--> Playing` (stop, move, reload in one call),
/// `Playing --stop--> Idle`, `Idle --advance--> Idle` (cursor only).
/// With an empty playlist every operation is a no-op.
pub struct PlaybackController<B> {
    playlist: Playlist,
    volume: f32,
    state: PlaybackState,
    backend: B,
    play_id: u64,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(playlist: Playlist, volume: f32, mut backend: B) -> Self {
        backend.set_volume(volume);
        tracing::info!(tracks = playlist.len(), volume, "playback controller ready");
        Self {
            playlist,
            volume,
            state: PlaybackState::default(),
            backend,
            play_id: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Tag of the most recent load; `Ended` events carrying another id are stale.
    pub fn play_id(&self) -> u64 {
        self.play_id
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.playlist.get(self.state.current_index)
    }

    pub fn needs_polling(&self) -> bool {
        !self.backend.notifies_completion()
    }

    /// Starts playing at the cursor. Returns whether playback is now running.
    pub fn start(&mut self) -> bool {
        if self.playlist.is_empty() {
            tracing::debug!("start ignored: playlist is empty");
            return false;
        }
        if self.state.is_playing {
            tracing::debug!("start ignored: already playing");
            return false;
        }

        self.state.is_playing = true;
        self.load_current();
        self.state.is_playing
    }

    pub fn advance(&mut self, direction: Direction) {
        let Some(index) = self.state.step(direction, self.playlist.len()) else {
            return;
        };
        if let Some(track) = self.playlist.get(index) {
            match direction {
                Direction::Forward => tracing::info!(track = %track.display(), "next track"),
                Direction::Backward => {
                    tracing::info!(track = %track.display(), "previous track")
                }
            }
        }

        if self.state.is_playing {
            self.backend.stop();
            self.load_current();
        }
    }

    /// Flips mute and returns the gain now applied to the backend.
    pub fn toggle_mute(&mut self) -> f32 {
        if self.playlist.is_empty() {
            return self.backend.volume();
        }

        self.state.is_muted = !self.state.is_muted;
        let gain = if self.state.is_muted { 0.0 } else { self.volume };
        self.backend.set_volume(gain);
        tracing::info!(volume = gain, muted = self.state.is_muted, "volume changed");
        gain
    }

    pub fn stop(&mut self) {
        if !self.state.is_playing {
            tracing::debug!("stop ignored: not playing");
            return;
        }

        self.state.is_playing = false;
        self.next_play_id();
        self.backend.stop();
        tracing::info!("playback stopped by user");
    }

    pub fn on_track_ended(&mut self, play_id: u64) {
        if !self.state.is_playing || play_id != self.play_id {
            tracing::debug!(play_id, current = self.play_id, "ignoring stale end of track");
            return;
        }

        self.state.step(Direction::Forward, self.playlist.len());
        self.load_current();
    }

    /// Fallback for backends that cannot report completion.
    pub fn poll_completion(&mut self) {
        if self.state.is_playing && !self.backend.is_busy() {
            self.on_track_ended(self.play_id);
        }
    }

    fn next_play_id(&mut self) -> u64 {
        self.play_id = self.play_id.wrapping_add(1).max(1);
        self.play_id
    }

    /// Loads the track under the cursor, skipping forward past tracks that
    /// fail to load. Stops playback once every track has failed in a row.
    fn load_current(&mut self) {
        let len = self.playlist.len();
        for _ in 0..len {
            let play_id = self.next_play_id();
            let Some(track) = self.playlist.get(self.state.current_index) else {
                break;
            };

            match self.backend.play(track, play_id) {
                Ok(()) => {
                    tracing::info!(
                        track = %track.display(),
                        volume = self.volume,
                        muted = self.state.is_muted,
                        play_id,
                        "playing track"
                    );
                    return;
                }
                Err(e) if e.is_track_specific() => {
                    tracing::warn!(track = %track.display(), err = %e, "skipping unplayable track");
                    self.state.step(Direction::Forward, len);
                }
                Err(e) => {
                    tracing::error!(err = %e, "audio backend failed");
                    break;
                }
            }
        }

        tracing::error!("no playable track, stopping playback");
        self.state.is_playing = false;
        self.backend.stop();
    }
}
