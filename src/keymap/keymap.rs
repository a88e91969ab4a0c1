//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::types::KeyEvent;

/// Key-to-command table keyed by canonical key equality
///
/// A raw console event, a parsed binding description and a crossterm event
/// all land on the same entry when they describe the same key.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<KeyEvent, String>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings; later bindings win
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        self.bind(binding.key, binding.command);
    }

    /// Bind `key`, returning the command it replaced
    pub fn bind(&mut self, key: KeyEvent, command: impl Into<String>) -> Option<String> {
        let command = command.into();
        let previous = self.bindings.insert(key.clone(), command);
        if let Some(ref old) = previous {
            tracing::debug!(key = %key, old = %old, "rebinding key");
        }
        previous
    }

    pub fn unbind(&mut self, key: &KeyEvent) -> Option<String> {
        self.bindings.remove(key)
    }

    /// Look up the command bound to a key
    pub fn lookup(&self, key: &KeyEvent) -> Option<&str> {
        self.bindings.get(key).map(String::as_str)
    }

    /// Find a key bound to `command`
    ///
    /// Several keys may share a command; which one is returned is unspecified.
    pub fn binding_for(&self, command: &str) -> Option<&KeyEvent> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == command)
            .map(|(key, _)| key)
    }

    /// All bindings, in no particular order
    pub fn bindings(&self) -> impl Iterator<Item = (&KeyEvent, &str)> {
        self.bindings.iter().map(|(key, cmd)| (key, cmd.as_str()))
    }

    /// Layer `other` on top of this keymap
    pub fn merge(&mut self, other: Keymap) {
        for (key, command) in other.bindings {
            self.bind(key, command);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
