pub mod app;
pub mod audio;
pub mod cli;
pub mod error;
pub mod hotkeys;
pub mod logging;
pub mod options;
pub mod platform;
pub mod player;
pub mod playlist;
