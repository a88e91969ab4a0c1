//! Keyboard layout queries: which physical key and modifiers type a character
//!
//! The layout is a capability handed to [`KeyEvent::from_char`]. On Windows
//! [`SystemLayout`] asks the active keyboard layout; elsewhere it knows no
//! characters and every lookup fails. [`FixedLayout`] is a table-driven
//! layout for tests and for hosts that bring their own mapping.

use std::collections::HashMap;

use super::keysyms::symbol_for_code;
use super::types::{KeyEvent, ModifierState};
use crate::error::{KeyError, Result};

/// Result of a layout query: the virtual key and the modifier byte needed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutScan {
    /// Modifier byte in [`ModifierState::from_code`] encoding
    pub shift_state: u8,
    pub virtual_key: u8,
}

impl LayoutScan {
    pub const fn new(shift_state: u8, virtual_key: u8) -> Self {
        Self {
            shift_state,
            virtual_key,
        }
    }

    /// Split a packed scan word (high byte shift state, low byte virtual key)
    ///
    /// `0xFFFF` (i.e. `-1`) means the layout cannot type the character.
    pub fn from_raw(raw: i16) -> Option<Self> {
        let raw = raw as u16;
        if raw == 0xFFFF {
            return None;
        }
        Some(Self {
            shift_state: (raw >> 8) as u8,
            virtual_key: (raw & 0xFF) as u8,
        })
    }
}

/// A keyboard layout that can be asked how to type a character
pub trait KeyboardLayout {
    fn scan(&self, ch: char) -> Option<LayoutScan>;
}

/// The host's active keyboard layout
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLayout;

impl KeyboardLayout for SystemLayout {
    #[cfg(windows)]
    fn scan(&self, ch: char) -> Option<LayoutScan> {
        use windows_sys::Win32::UI::Input::KeyboardAndMouse::VkKeyScanW;

        let mut units = [0u16; 2];
        let encoded = ch.encode_utf16(&mut units);
        if encoded.len() != 1 {
            return None;
        }
        // SAFETY: VkKeyScanW takes a UTF-16 code unit by value and touches no
        // caller memory.
        let raw = unsafe { VkKeyScanW(encoded[0]) };
        LayoutScan::from_raw(raw)
    }

    #[cfg(not(windows))]
    fn scan(&self, _ch: char) -> Option<LayoutScan> {
        None
    }
}

/// A layout backed by an explicit character table
#[derive(Clone, Debug, Default)]
pub struct FixedLayout {
    table: HashMap<char, LayoutScan>,
}

impl FixedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, shift_state: u8, virtual_key: u8) {
        self.table
            .insert(ch, LayoutScan::new(shift_state, virtual_key));
    }

    /// Add a mapping (builder pattern)
    pub fn with(mut self, ch: char, shift_state: u8, virtual_key: u8) -> Self {
        self.insert(ch, shift_state, virtual_key);
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// US QWERTY, as the Windows `kbdus` layout reports it
    pub fn us_qwerty() -> Self {
        const SHIFT: u8 = 0x01;
        const CTRL: u8 = 0x02;

        let mut layout = Self::new();

        for lower in 'a'..='z' {
            let vk = lower.to_ascii_uppercase() as u8;
            layout.insert(lower, 0, vk);
            layout.insert(lower.to_ascii_uppercase(), SHIFT, vk);
        }

        for (i, shifted) in ")!@#$%^&*(".chars().enumerate() {
            let vk = b'0' + i as u8;
            layout.insert(char::from(vk), 0, vk);
            layout.insert(shifted, SHIFT, vk);
        }

        // OEM punctuation keys
        for (plain, shifted, vk) in [
            (';', ':', 0xBA),
            ('=', '+', 0xBB),
            (',', '<', 0xBC),
            ('-', '_', 0xBD),
            ('.', '>', 0xBE),
            ('/', '?', 0xBF),
            ('`', '~', 0xC0),
            ('[', '{', 0xDB),
            ('\\', '|', 0xDC),
            (']', '}', 0xDD),
            ('\'', '"', 0xDE),
        ] {
            layout.insert(plain, 0, vk);
            layout.insert(shifted, SHIFT, vk);
        }

        layout.insert(' ', 0, 0x20);
        layout.insert('\u{8}', 0, 0x08);
        layout.insert('\t', 0, 0x09);
        layout.insert('\r', 0, 0x0D);
        layout.insert('\n', CTRL, 0x0D);
        layout.insert('\u{1b}', 0, 0x1B);

        // Control characters typed as Ctrl+letter
        for code in 0x01u8..=0x1A {
            let ch = char::from(code);
            if !layout.table.contains_key(&ch) {
                layout.insert(ch, CTRL, 0x40 + code);
            }
        }

        layout
    }
}

impl KeyboardLayout for FixedLayout {
    fn scan(&self, ch: char) -> Option<LayoutScan> {
        self.table.get(&ch).copied()
    }
}

impl KeyEvent {
    /// Build the event for the physical key that types `ch` on `layout`
    ///
    /// Modifiers the layout needs to produce `ch` are added to `requested`;
    /// they are never removed. The resulting character is the one named by
    /// the virtual key rather than `ch` itself, so `'!'` on US QWERTY becomes
    /// Shift + `1`. Printable virtual keys (space included) give their own
    /// character; non-printable ones with a symbolic name (tab, return)
    /// yield that name. A caller-supplied `keyname` takes precedence.
    pub fn from_char<L: KeyboardLayout + ?Sized>(
        layout: &L,
        ch: char,
        requested: ModifierState,
        keyname: &str,
    ) -> Result<Self> {
        let Some(scan) = layout.scan(ch) else {
            tracing::debug!(?ch, "keyboard layout has no mapping");
            return Err(KeyError::BadKey(ch));
        };

        let required = ModifierState::from_code(u32::from(scan.shift_state))?;
        let state = requested | required;

        let vk = scan.virtual_key;
        if vk == b' ' || vk.is_ascii_graphic() {
            return Ok(KeyEvent::new(char::from(vk).to_string(), keyname, state));
        }

        let keyname = match symbol_for_code(u32::from(vk)) {
            _ if !keyname.is_empty() => keyname,
            Some(symbol) => symbol,
            None => return Err(KeyError::UnprintableVirtualKey(vk)),
        };
        Ok(KeyEvent::new("", keyname, state))
    }
}
