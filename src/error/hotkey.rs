//! Global hotkey errors

/// Errors raised while installing the global hotkey listener
#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    /// Platform hotkey manager could not be created
    #[error("failed to create hotkey manager: {0}")]
    Manager(String),

    /// Accelerator string in the binding table is not a valid hotkey
    #[error("invalid accelerator `{accelerator}`: {message}")]
    Parse {
        accelerator: String,
        message: String,
    },

    /// Hotkey could not be registered (usually already taken by another program)
    #[error("failed to register `{accelerator}`: {message}")]
    Register {
        accelerator: String,
        message: String,
    },

    /// Listener thread exited before reporting its registration result
    #[error("hotkey listener stopped before it was ready")]
    ListenerStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_error_display() {
        let err = HotkeyError::Register {
            accelerator: "ctrl+alt+shift+e".to_owned(),
            message: "already registered".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to register `ctrl+alt+shift+e`: already registered"
        );
    }
}
