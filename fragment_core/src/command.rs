//! Editor commands and their outcomes

use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::key::Key;

/// One discrete input command, as read by the host once per tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum EditorCommand {
    /// Move the highlight through the fragment list (wraps)
    MoveHighlight(isize),
    /// Move the text-box cursor (wraps)
    MoveCursor(isize),
    /// Insert text before the cursor
    Insert(String),
    /// Backspace
    DeleteChar,
    /// Delete the highlighted fragment
    DeleteFragment,
}

impl EditorCommand {
    /// Map a key to its command. Every key maps to something; keys without
    /// printable text become an empty insert.
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::Down => EditorCommand::MoveHighlight(1),
            Key::Up => EditorCommand::MoveHighlight(-1),
            Key::Left => EditorCommand::MoveCursor(-1),
            Key::Right => EditorCommand::MoveCursor(1),
            Key::Backspace => EditorCommand::DeleteChar,
            Key::Delete => EditorCommand::DeleteFragment,
            other => EditorCommand::Insert(other.text()),
        }
    }
}

impl From<Key> for EditorCommand {
    fn from(key: Key) -> Self {
        Self::from_key(&key)
    }
}

/// Outcome of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed (text, cursor or highlight)
    Changed,
    /// Command was refused or had no effect
    Unchanged,
}

impl CommandOutcome {
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            CommandOutcome::Changed
        } else {
            CommandOutcome::Unchanged
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, CommandOutcome::Changed)
    }
}
