mod backend;
mod messages;
mod null_backend;
mod player;

pub use backend::AudioBackend;
pub use messages::BackendEvent;
pub use null_backend::NullBackend;
pub use player::RodioBackend;
