use clap::Parser;
use std::path::PathBuf;

/// Every flag is optional; with none the player reads `./options.json`.
#[derive(Debug, Parser)]
#[command(
    name = "hotkey-player",
    version,
    about = "Background audio player controlled by global hotkeys"
)]
pub struct Cli {
    /// Options file (default `./options.json`, then the user config dir)
    #[arg(long, env = "HOTKEY_PLAYER_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Directory for `audio_player.log` (default: working directory)
    #[arg(long, env = "HOTKEY_PLAYER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter (same syntax as RUST_LOG)
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// Run without an audio device; tracks play silently until skipped
    #[arg(long)]
    pub no_audio: bool,
}
