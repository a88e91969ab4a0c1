//! keypress - key-event normalization for line editors
//!
//! This crate turns raw console key events, keyboard-layout scans and keymap
//! binding descriptions into a single comparable [`KeyEvent`].

pub mod config_paths;
pub mod error;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use error::KeyError;
pub use keymap::{Keybinding, KeyEvent, Keymap, ModifierState};
