//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use keypress::keymap::{LEFT_ALT_PRESSED, LEFT_CTRL_PRESSED, SHIFT_PRESSED};
use keypress::{KeyEvent, ModifierState};

/// Parse a binding description, panicking on failure
pub fn key(descr: &str) -> KeyEvent {
    KeyEvent::from_descr(descr).unwrap_or_else(|e| panic!("{:?} should parse: {}", descr, e))
}

/// Raw console state bits for the given modifiers
pub fn raw_state(state: ModifierState) -> u32 {
    let mut bits = 0;
    if state.control {
        bits |= LEFT_CTRL_PRESSED;
    }
    if state.meta {
        bits |= LEFT_ALT_PRESSED;
    }
    if state.shift {
        bits |= SHIFT_PRESSED;
    }
    bits
}

/// Simulate the console delivering a key press
pub fn console_event(ch: &str, state: ModifierState, keycode: u32) -> KeyEvent {
    KeyEvent::from_raw_event(ch, raw_state(state), keycode).expect("raw event should decode")
}

/// Write `contents` to a temporary keymap file
pub fn keymap_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp keymap");
    file.write_all(contents.as_bytes())
        .expect("write temp keymap");
    file
}
