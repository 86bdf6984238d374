use clap::Parser;
use hotkey_player::cli::Cli;
use hotkey_player::error::AppError;
use hotkey_player::platform::Platform;
use hotkey_player::{app, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let _log_guard = logging::init(logging::LogConfig {
        dir: cli.log_dir.clone(),
        filter: cli.log_filter.clone(),
    });

    let platform = match Platform::detect() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(());
        }
    };
    tracing::info!(os = platform.name(), "detected OS");

    app::run(cli).await
}
