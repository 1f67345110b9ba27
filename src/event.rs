//! Key event model and winit bridge.
//!
//! Subscriptions match against the crate's own [`KeyEvent`] value type rather
//! than winit's, so hosts that do not use winit can still feed the dispatcher
//! and tests can construct events directly (winit's `KeyEvent` has private
//! fields and cannot be built outside winit).

use winit::event::ElementState;
use winit::keyboard::Key;

/// Whether a key was pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Pressed,
    Released,
}

impl From<ElementState> for KeyEventKind {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => Self::Pressed,
            ElementState::Released => Self::Released,
        }
    }
}

/// A keyboard event as delivered to subscription handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Pressed or released.
    pub kind: KeyEventKind,
    /// Key identifier; see [`key_name`] for the vocabulary.
    pub key: String,
    /// True for OS-generated repeats while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    /// Create an event with the repeat flag cleared.
    pub fn new(kind: KeyEventKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            repeat: false,
        }
    }

    /// Convert a winit key event.
    ///
    /// Returns `None` when the logical key has no identifier (dead keys,
    /// unidentified keys). Such events can never match a subscription, so
    /// callers drop them before dispatch.
    pub fn from_winit(event: &winit::event::KeyEvent) -> Option<Self> {
        let key = key_name(&event.logical_key)?;
        Some(Self {
            kind: event.state.into(),
            key,
            repeat: event.repeat,
        })
    }
}

/// Identifier string for a winit logical key.
///
/// Character keys use the text the key produced (`"a"`, `"B"`, `"/"`);
/// matching is case-sensitive, so a shifted key is a different identifier.
/// Named keys use their winit name (`"Enter"`, `"Escape"`, `"F5"`,
/// `"ArrowUp"`). Dead and unidentified keys have no identifier.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        Key::Named(named) => Some(format!("{named:?}")),
        _ => None,
    }
}
