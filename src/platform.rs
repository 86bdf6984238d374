//! Host OS detection.
//!
//! Only Windows and Linux are supported; both run the same player and differ
//! only in how the hotkey thread receives its events.

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    pub fn detect() -> Result<Self, AppError> {
        let os = std::env::consts::OS;
        Self::from_os(os).ok_or_else(|| AppError::UnsupportedPlatform(os.to_owned()))
    }

    /// Maps a `std::env::consts::OS` value.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
        }
    }
}

/// Dispatches pending window messages so the hotkey manager's hidden window
/// can deliver its events. Must run on the thread that created the manager.
#[cfg(windows)]
pub(crate) fn pump_messages() {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage,
    };

    let mut msg = MSG::default();
    // SAFETY: `msg` is a valid, exclusively borrowed MSG for every call.
    unsafe {
        while PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

// x11 delivers hotkey events from its own thread
#[cfg(not(windows))]
pub(crate) fn pump_messages() {}
