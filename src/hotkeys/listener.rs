use std::collections::HashMap;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tokio::sync::oneshot;

use super::bindings::{Binding, HotkeyAction};
use crate::error::HotkeyError;
use crate::platform;
use crate::player::PlayerHandle;

// upper bound on hotkey latency where the platform needs a message pump
const EVENT_WAIT: Duration = Duration::from_millis(50);

/// Registers `bindings` on a dedicated thread and forwards presses to `handle`.
///
/// Resolves once every hotkey is registered, or with the first failure. The
/// thread keeps running until the player stops accepting commands.
pub async fn spawn_listener(
    bindings: &[Binding],
    handle: PlayerHandle,
) -> Result<(), HotkeyError> {
    let parsed = parse_bindings(bindings)?;
    let actions = action_table(&parsed);
    let (tx_ready, rx_ready) = oneshot::channel();

    thread::Builder::new()
        .name("hotkey-listener".to_owned())
        .spawn(move || {
            // the manager must be created on the thread that pumps its events
            let manager = match register_all(&parsed) {
                Ok(m) => {
                    let _ = tx_ready.send(Ok(()));
                    m
                }
                Err(e) => {
                    let _ = tx_ready.send(Err(e));
                    return;
                }
            };
            forward_events(manager, actions, handle);
        })
        .map_err(|e| HotkeyError::Manager(e.to_string()))?;

    rx_ready.await.map_err(|_| HotkeyError::ListenerStopped)?
}

fn parse_bindings(bindings: &[Binding]) -> Result<Vec<(HotKey, Binding)>, HotkeyError> {
    bindings
        .iter()
        .map(|b| {
            HotKey::from_str(b.accelerator)
                .map(|hotkey| (hotkey, *b))
                .map_err(|e| HotkeyError::Parse {
                    accelerator: b.accelerator.to_owned(),
                    message: e.to_string(),
                })
        })
        .collect()
}

fn action_table(parsed: &[(HotKey, Binding)]) -> HashMap<u32, HotkeyAction> {
    parsed
        .iter()
        .map(|(hotkey, binding)| (hotkey.id(), binding.action))
        .collect()
}

fn register_all(parsed: &[(HotKey, Binding)]) -> Result<GlobalHotKeyManager, HotkeyError> {
    let manager = GlobalHotKeyManager::new().map_err(|e| HotkeyError::Manager(e.to_string()))?;
    for (hotkey, binding) in parsed {
        manager
            .register(*hotkey)
            .map_err(|e| HotkeyError::Register {
                accelerator: binding.accelerator.to_owned(),
                message: e.to_string(),
            })?;
        tracing::info!(
            accelerator = binding.accelerator,
            action = binding.action.as_str(),
            "hotkey registered"
        );
    }
    Ok(manager)
}

fn forward_events(
    _manager: GlobalHotKeyManager,
    actions: HashMap<u32, HotkeyAction>,
    handle: PlayerHandle,
) {
    let receiver = GlobalHotKeyEvent::receiver();
    loop {
        platform::pump_messages();
        match receiver.recv_timeout(EVENT_WAIT) {
            Ok(event) => {
                if !matches!(event.state, HotKeyState::Pressed) {
                    continue;
                }
                let Some(action) = actions.get(&event.id) else {
                    continue;
                };
                tracing::debug!(action = action.as_str(), "hotkey pressed");
                if !handle.blocking_send(action.command()) {
                    break;
                }
            }
            Err(e) if e.is_timeout() => {
                if handle.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    tracing::debug!("hotkey listener stopped");
}
