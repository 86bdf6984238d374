/// Notifications sent by an audio backend back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendEvent {
    /// The track loaded under `play_id` ran to its natural end
    Ended { play_id: u64 },
}
