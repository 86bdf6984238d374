//! Playback control
//!
//! [`PlaybackController`] is the state machine: it owns the playlist, the
//! cursor and the playing/muted flags and drives an [`AudioBackend`].
//! [`PlayerActor`] owns the controller and is the only place its state is
//! touched; everything else talks to it through a [`PlayerHandle`].
//!
//! [`AudioBackend`]: crate::audio::AudioBackend

mod actor;
mod controller;
mod state;

pub use actor::{PlayerActor, PlayerCommand, PlayerHandle, command_channel};
pub use controller::PlaybackController;
pub use state::{Direction, PlaybackState};

#[cfg(test)]
pub(crate) mod testing;
