use crate::player::PlayerCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    NextTrack,
    PreviousTrack,
    ToggleMute,
    Stop,
}

impl HotkeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NextTrack => "next_track",
            Self::PreviousTrack => "previous_track",
            Self::ToggleMute => "toggle_mute",
            Self::Stop => "stop",
        }
    }

    pub fn command(&self) -> PlayerCommand {
        match self {
            Self::NextTrack => PlayerCommand::Next,
            Self::PreviousTrack => PlayerCommand::Previous,
            Self::ToggleMute => PlayerCommand::ToggleMute,
            Self::Stop => PlayerCommand::Stop,
        }
    }
}

/// One key combination and the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Accelerator in `global-hotkey` syntax, e.g. `ctrl+alt+shift+e`
    pub accelerator: &'static str,
    pub action: HotkeyAction,
}

pub const DEFAULT_BINDINGS: [Binding; 4] = [
    Binding {
        accelerator: "ctrl+alt+shift+e",
        action: HotkeyAction::NextTrack,
    },
    Binding {
        accelerator: "ctrl+alt+shift+q",
        action: HotkeyAction::PreviousTrack,
    },
    Binding {
        accelerator: "ctrl+alt+shift+w",
        action: HotkeyAction::ToggleMute,
    },
    Binding {
        accelerator: "ctrl+alt+shift+esc",
        action: HotkeyAction::Stop,
    },
];
