//! Unified error handling
//!
//! Structured error types for every startup boundary and for the audio
//! backend. Each boundary logs its own error and decides whether startup
//! continues; nothing here is surfaced through the playback controller.

mod app;
mod audio;
mod hotkey;
mod options;
mod playlist;

pub use app::AppError;
pub use audio::AudioError;
pub use hotkey::HotkeyError;
pub use options::OptionsError;
pub use playlist::PlaylistError;
