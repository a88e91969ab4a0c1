//! Key-event normalization
//!
//! Three input encodings meet here and leave as one canonical [`KeyEvent`]:
//! - Binding descriptions from keymap files (`"Control-c"`, `"\C-x"`, `"f1"`)
//! - Raw console events `(char, control-key state, virtual key code)`
//! - Characters mapped back through the keyboard layout
//!
//! # Architecture
//!
//! ```text
//! "Control-c"          ─┐
//! ("\x03", 0x08, 0x43) ─┼→ KeyEvent → Keymap::lookup() → command
//! crossterm::KeyEvent  ─┘
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! let bindings = load_keymap_file(Path::new("keymap.yaml"), LoadPolicy::Skip)?;
//! let keymap = Keymap::with_bindings(bindings);
//! let key = KeyEvent::from_raw_event(ch, state, keycode)?;
//! let command = keymap.lookup(&key);
//! ```

mod binding;
mod config;
mod crossterm_adapter;
mod descr;
mod event;
#[allow(clippy::module_inception)]
mod keymap;
pub mod keysyms;
mod layout;
mod types;

pub use binding::Keybinding;
pub use config::{
    load_keymap_file, load_user_keymap, parse_keymap_yaml, BindingConfig, KeymapConfig,
    KeymapError, LoadPolicy,
};
pub use crossterm_adapter::key_event_from_crossterm;
pub use descr::parse_key_descr;
pub use event::{
    LEFT_ALT_PRESSED, LEFT_CTRL_PRESSED, RIGHT_ALT_PRESSED, RIGHT_CTRL_PRESSED, SHIFT_PRESSED,
};
pub use keymap::Keymap;
pub use layout::{FixedLayout, KeyboardLayout, LayoutScan, SystemLayout};
pub use types::{DescriptorSource, KeyEvent, KeyRecord, ModifierState};
