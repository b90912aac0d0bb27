//! # Input Script Parser
//!
//! Provides a simple scripted input format for deterministic review sessions.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one input action:
//! - Key names: `Up`, `Down`, `Left`, `Right`, `Backspace`, `Delete`,
//!   `Enter`, `Tab`, `Escape`, `Space`
//! - Single characters: `a`, `!`, `é`
//! - Quoted strings: `"Hello"` (expanded to one key press per character)
//! - Text events: `text "Hello"` (one multi-character insert)
//! - `quit` ends the session
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Fix the second detection
//! Down
//! Backspace
//! "g!"
//! Delete
//! quit
//! ```

use fragment_core::Key;
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted input action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// A single key event
    Key(Key),
    /// End the session
    Quit,
}

/// Input script
///
/// Parses and provides scripted input events for deterministic sessions.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    /// Creates a new empty input script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut script = Self::new();
        for (line_num, line) in text.lines().enumerate() {
            script.push_line(line, line_num + 1)?;
        }

        if script.inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }
        Ok(script)
    }

    /// Parses one line and queues its inputs; returns how many were queued
    pub fn push_line(&mut self, line: &str, line_num: usize) -> Result<usize, InputScriptError> {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            return Ok(0);
        }

        let parsed = Self::parse_line(line, line_num)?;
        let count = parsed.len();
        self.inputs.extend(parsed);
        Ok(count)
    }

    /// Parses a single non-empty line of script
    fn parse_line(line: &str, line_num: usize) -> Result<Vec<ScriptedInput>, InputScriptError> {
        if line.eq_ignore_ascii_case("quit") {
            return Ok(vec![ScriptedInput::Quit]);
        }

        // Handle text events
        if let Some(rest) = line.strip_prefix("text ") {
            let text = Self::unquote(rest.trim()).ok_or_else(|| InputScriptError::ParseError {
                line: line_num,
                message: format!("text needs a quoted string, got {}", rest.trim()),
            })?;
            return Ok(vec![ScriptedInput::Key(Key::Text(text.to_string()))]);
        }

        // Handle quoted strings
        if let Some(text) = Self::unquote(line) {
            return Ok(text
                .chars()
                .map(|c| ScriptedInput::Key(Key::Char(c)))
                .collect());
        }

        let key = Self::parse_key(line).map_err(|e| InputScriptError::ParseError {
            line: line_num,
            message: e.to_string(),
        })?;
        Ok(vec![ScriptedInput::Key(key)])
    }

    fn unquote(text: &str) -> Option<&str> {
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            Some(&text[1..text.len() - 1])
        } else {
            None
        }
    }

    /// Parses a key name to Key
    fn parse_key(name: &str) -> Result<Key, InputScriptError> {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(ch));
        }

        match name.to_lowercase().as_str() {
            // Arrow keys
            "up" | "arrowup" => Ok(Key::Up),
            "down" | "arrowdown" => Ok(Key::Down),
            "left" | "arrowleft" => Ok(Key::Left),
            "right" | "arrowright" => Ok(Key::Right),

            // Editing keys
            "backspace" | "back" => Ok(Key::Backspace),
            "delete" | "del" => Ok(Key::Delete),

            // Keys without printable text
            "enter" | "return" => Ok(Key::Enter),
            "tab" => Ok(Key::Tab),
            "escape" | "esc" => Ok(Key::Escape),
            "space" => Ok(Key::Char(' ')),

            _ => Err(InputScriptError::InvalidKeyName(name.to_string())),
        }
    }

    /// Returns the next input, if any
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    /// Returns true if the script has more inputs
    pub fn has_more(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Returns the number of remaining inputs
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}
