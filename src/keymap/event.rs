//! Decoder for raw console key events: `(char, control-key state, virtual key code)`

use super::keysyms::symbol_for_code;
use super::types::{KeyEvent, ModifierState};
use crate::error::{KeyError, Result};

/// Console control-key state bits
pub const RIGHT_ALT_PRESSED: u32 = 0x0001;
pub const LEFT_ALT_PRESSED: u32 = 0x0002;
pub const RIGHT_CTRL_PRESSED: u32 = 0x0004;
pub const LEFT_CTRL_PRESSED: u32 = 0x0008;
pub const SHIFT_PRESSED: u32 = 0x0010;

const ALT_PRESSED: u32 = RIGHT_ALT_PRESSED | LEFT_ALT_PRESSED;
const CTRL_PRESSED: u32 = RIGHT_CTRL_PRESSED | LEFT_CTRL_PRESSED;

impl KeyEvent {
    /// Decode a raw key event from the console
    ///
    /// A pure Control chord is identified by its key code: the composed `ch`
    /// is replaced by the character whose code point is `keycode`. Control
    /// together with Alt is how AltGr arrives, so both flags are dropped and
    /// the composed `ch` is kept. `keyname` comes from the virtual-key symbol
    /// table and stays empty for unmapped codes.
    pub fn from_raw_event(ch: &str, raw_state: u32, keycode: u32) -> Result<Self> {
        let mut control = raw_state & CTRL_PRESSED != 0;
        let mut meta = raw_state & ALT_PRESSED != 0;
        let shift = raw_state & SHIFT_PRESSED != 0;

        let mut ch = ch.to_string();
        if control && !meta {
            let key_char = char::from_u32(keycode).ok_or(KeyError::InvalidCodePoint(keycode))?;
            ch = key_char.to_string();
        } else if control && meta {
            control = false;
            meta = false;
        }

        let keyname = symbol_for_code(keycode).unwrap_or_default();
        Ok(KeyEvent::new(
            ch,
            keyname,
            ModifierState::new(shift, control, meta),
        ))
    }
}
