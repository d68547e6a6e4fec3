//! Input events delivered by the host UI.

use crate::shapes::Position;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary button: create a shape or deselect.
    Left,
    /// Secondary button: select and start a drag.
    Right,
    Middle,
}

impl MouseButton {
    /// Parse a button name ("left", "right", "middle").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" | "primary" => Some(MouseButton::Left),
            "right" | "secondary" => Some(MouseButton::Right),
            "middle" => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Pointer event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Position,
        button: MouseButton,
    },
    Up {
        position: Position,
        button: MouseButton,
    },
    Move {
        position: Position,
    },
}

/// Keys the canvas distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Other(String),
}

impl Key {
    /// Map a host key name to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Delete" | "Del" => Key::Delete,
            "Backspace" => Key::Backspace,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }

    /// Whether this key deletes the current selection.
    pub fn is_delete(&self) -> bool {
        matches!(self, Key::Delete | Key::Backspace)
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
}

/// Any input event the canvas consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}
