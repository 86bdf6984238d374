use std::path::Path;

use crate::error::AudioError;

/// Output device seam used by the playback controller.
///
/// Only one track is loaded at a time: `play` replaces whatever was playing.
/// Backends that can detect the end of a track send
/// [`BackendEvent::Ended`](super::BackendEvent) tagged with the `play_id`
/// they were given; the others are polled through [`is_busy`](Self::is_busy).
pub trait AudioBackend {
    fn play(&mut self, track: &Path, play_id: u64) -> Result<(), AudioError>;

    fn stop(&mut self);

    /// Output gain applied to the current track and every later one.
    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    /// Whether the loaded track is still producing sound.
    fn is_busy(&self) -> bool;

    fn notifies_completion(&self) -> bool {
        true
    }
}
