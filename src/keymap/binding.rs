//! Keybinding struct representing a mapping from a key to a command

use super::types::KeyEvent;
use crate::error::Result;

/// A single keybinding: one normalized key and the command it triggers
///
/// Commands are opaque names; resolving them is up to the line editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: KeyEvent,
    pub command: String,
}

impl Keybinding {
    pub fn new(key: KeyEvent, command: impl Into<String>) -> Self {
        Self {
            key,
            command: command.into(),
        }
    }

    /// Create a binding from a binding description such as `"Control-a"`
    pub fn parse(descr: &str, command: impl Into<String>) -> Result<Self> {
        Ok(Self::new(KeyEvent::from_descr(descr)?, command))
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        format!("{}: {}", self.key, self.command)
    }
}
