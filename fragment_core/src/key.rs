//! Platform-independent key representation

use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Platform-independent key event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Key {
    // Printable input
    Char(char),
    /// Text delivered as one event (IME commit, paste)
    Text(String),

    // Navigation
    Left,
    Right,
    Up,
    Down,

    // Editing
    Backspace,
    Delete,

    // Keys without printable text
    Enter,
    Tab,
    Escape,
}

impl Key {
    /// Printable text carried by this key, empty for control keys
    pub fn text(&self) -> String {
        match self {
            Key::Char(ch) => {
                let mut text = String::new();
                text.push(*ch);
                text
            }
            Key::Text(text) => text.clone(),
            _ => String::new(),
        }
    }
}
