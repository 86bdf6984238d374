pub mod store;

pub use store::{
    DEFAULT_POLL_INTERVAL_MS, OPTIONS_FILE, PlaybackOptions, load_options, resolve_options_path,
};
