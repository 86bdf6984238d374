#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Cursor and flags of the playback state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub is_muted: bool,
}

impl PlaybackState {
    /// Moves the cursor one step, wrapping around a playlist of `len` tracks.
    /// Returns the new index, or `None` when the playlist is empty.
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let pos = self.current_index.min(len - 1);
        self.current_index = match direction {
            Direction::Forward => (pos + 1) % len,
            Direction::Backward => {
                if pos == 0 {
                    len - 1
                } else {
                    pos - 1
                }
            }
        };
        Some(self.current_index)
    }
}
