//! Input events delivered to components.

use crate::navigation::Key;

/// Keyboard event with a cancelable default action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    key: Key,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// Create a key-down event for `key`.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Pressed key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Suppress the host's default handling (scrolling, activation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Event dispatched at a target element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer activation.
    Click,
    /// Key pressed while the target had focus.
    KeyDown(KeyboardEvent),
}

impl UiEvent {
    /// Key-down event for `key`.
    #[must_use]
    pub fn key_down(key: Key) -> Self {
        Self::KeyDown(KeyboardEvent::new(key))
    }

    /// Whether a handler suppressed the default action.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        match self {
            Self::Click => false,
            Self::KeyDown(event) => event.default_prevented(),
        }
    }
}
