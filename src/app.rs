use std::env;
use std::path::Path;
use tokio::sync::mpsc;

use crate::audio::{AudioBackend, BackendEvent, NullBackend, RodioBackend};
use crate::cli::Cli;
use crate::error::AppError;
use crate::hotkeys::{self, DEFAULT_BINDINGS};
use crate::options::{self, PlaybackOptions};
use crate::player::{PlaybackController, PlayerActor, PlayerCommand, PlayerHandle, command_channel};
use crate::playlist::Playlist;

const BACKEND_EVENT_BUFFER: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioBackendKind {
    Real,
    Null,
}

impl AudioBackendKind {
    /// `--no-audio` or `HOTKEY_PLAYER_NO_AUDIO=1|true|yes|on` selects the silent backend.
    pub fn select(no_audio: bool) -> Self {
        let no_audio_env = env::var("HOTKEY_PLAYER_NO_AUDIO")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);
        if no_audio || no_audio_env {
            AudioBackendKind::Null
        } else {
            AudioBackendKind::Real
        }
    }
}

/// Loads options, builds the playlist, installs hotkeys and plays until stopped.
///
/// Unusable options or an empty playlist end startup quietly after logging;
/// audio device and hotkey failures are returned.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let options_path = options::resolve_options_path(cli.options);
    let Some(opts) = load_startup_options(&options_path) else {
        return Ok(());
    };
    let Some(playlist) = build_playlist(&opts) else {
        return Ok(());
    };

    let (tx_evt, rx_evt) = mpsc::channel(BACKEND_EVENT_BUFFER);
    match AudioBackendKind::select(cli.no_audio) {
        AudioBackendKind::Real => {
            let backend = RodioBackend::open(tx_evt)?;
            play(&opts, playlist, backend, rx_evt).await
        }
        AudioBackendKind::Null => {
            tracing::info!("audio disabled, using silent backend");
            drop(tx_evt);
            play(&opts, playlist, NullBackend::new(), rx_evt).await
        }
    }
}

pub fn load_startup_options(path: &Path) -> Option<PlaybackOptions> {
    match options::load_options(path) {
        Ok(opts) => {
            tracing::info!(
                options = %path.display(),
                path = %opts.path.display(),
                volume = opts.volume,
                "loaded options"
            );
            Some(opts)
        }
        Err(e) => {
            tracing::error!(err = %e, "cannot use options file, not starting");
            None
        }
    }
}

pub fn build_playlist(opts: &PlaybackOptions) -> Option<Playlist> {
    match Playlist::from_source(&opts.path) {
        Ok(playlist) if playlist.is_empty() => {
            tracing::warn!(path = %opts.path.display(), "no playable audio files found, not starting");
            None
        }
        Ok(playlist) => {
            tracing::info!(path = %opts.path.display(), tracks = playlist.len(), "playlist built");
            Some(playlist)
        }
        Err(e) => {
            tracing::error!(err = %e, "cannot build playlist, not starting");
            None
        }
    }
}

async fn play<B: AudioBackend>(
    opts: &PlaybackOptions,
    playlist: Playlist,
    backend: B,
    rx_evt: mpsc::Receiver<BackendEvent>,
) -> Result<(), AppError> {
    let controller = PlaybackController::new(playlist, opts.volume, backend);
    let (handle, rx_cmd) = command_channel();

    hotkeys::spawn_listener(&DEFAULT_BINDINGS, handle.clone()).await?;
    spawn_ctrl_c(handle);

    tracing::info!("starting background playback");
    PlayerActor::new(controller, rx_cmd, rx_evt, opts.poll_interval())
        .run()
        .await;
    Ok(())
}

fn spawn_ctrl_c(handle: PlayerHandle) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted");
            handle.send(PlayerCommand::Stop).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_audio_flag_selects_null_backend() {
        assert_eq!(AudioBackendKind::select(true), AudioBackendKind::Null);
    }

    #[test]
    fn malformed_options_do_not_start() {
        let dir = tempfile::tempdir().expect("tempdir");
        let p = dir.path().join("options.json");
        std::fs::write(&p, b"{\"path\": ").expect("write");
        assert!(load_startup_options(&p).is_none());
    }

    #[test]
    fn empty_directory_does_not_start() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("cover.jpg"), b"").expect("write");
        let opts = PlaybackOptions::new(dir.path(), 0.5);
        assert!(build_playlist(&opts).is_none());
    }
}
