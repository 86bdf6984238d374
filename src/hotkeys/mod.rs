//! Global hotkeys
//!
//! The fixed key combinations live in a declarative table ([`DEFAULT_BINDINGS`]);
//! the listener only knows how to turn a table into registered hotkeys and
//! forward presses to the player.

mod bindings;
mod listener;

pub use bindings::{Binding, DEFAULT_BINDINGS, HotkeyAction};
pub use listener::spawn_listener;
