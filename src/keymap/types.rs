//! Core types for key normalization: ModifierState and KeyEvent

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, Result};

/// The Shift/Control/Meta flags held during a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierState {
    pub shift: bool,
    pub control: bool,
    /// Meta is Alt on PC keyboards
    pub meta: bool,
}

impl ModifierState {
    pub const NONE: ModifierState = ModifierState::new(false, false, false);
    pub const SHIFT: ModifierState = ModifierState::new(true, false, false);
    pub const CONTROL: ModifierState = ModifierState::new(false, true, false);
    pub const META: ModifierState = ModifierState::new(false, false, true);

    pub const fn new(shift: bool, control: bool, meta: bool) -> Self {
        Self {
            shift,
            control,
            meta,
        }
    }

    /// Decode a modifier byte: bit 0 shift, bit 1 control, bit 2 meta
    ///
    /// Bits 3-7 are ignored. Codes wider than a byte are rejected.
    pub fn from_code(code: u32) -> Result<Self> {
        if code > 0xFF {
            return Err(KeyError::CodeOutOfRange(code));
        }
        Ok(Self {
            shift: code & 0x01 != 0,
            control: code & 0x02 != 0,
            meta: code & 0x04 != 0,
        })
    }

    /// Plain `{shift, control, meta}` mapping
    pub fn to_record(self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("shift", self.shift),
            ("control", self.control),
            ("meta", self.meta),
        ])
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.shift || self.control || self.meta)
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: ModifierState) -> ModifierState {
        ModifierState {
            shift: self.shift || other.shift,
            control: self.control || other.control,
            meta: self.meta || other.meta,
        }
    }

    /// Chorded keys report their character upper-cased
    #[inline]
    pub const fn forces_upper(self) -> bool {
        self.control || self.meta
    }
}

impl std::ops::BitOr for ModifierState {
    type Output = ModifierState;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Renders the binding-description prefix, e.g. `Control-Meta-`
impl fmt::Display for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control {
            f.write_str("Control-")?;
        }
        if self.meta {
            f.write_str("Meta-")?;
        }
        if self.shift {
            f.write_str("Shift-")?;
        }
        Ok(())
    }
}

/// Where a KeyEvent's descriptor came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DescriptorSource {
    #[serde(rename = "keyname")]
    Keyname,
    #[serde(rename = "char-upper")]
    CharUpper,
    #[serde(rename = "char")]
    Char,
}

/// Serializable snapshot of a KeyEvent's canonical form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeyRecord {
    pub control: bool,
    pub meta: bool,
    pub shift: bool,
    pub desc: String,
    pub dsrc: DescriptorSource,
}

/// A normalized key press: a character or a symbolic key name, plus modifiers
///
/// Built through one of the construction paths ([`KeyEvent::new`],
/// [`KeyEvent::from_descr`], [`KeyEvent::from_raw_event`],
/// [`KeyEvent::from_char`]) and immutable afterwards. Equality and hashing
/// go through [`KeyEvent::to_tuple`], so two events compare equal whenever
/// they describe the same key with the same modifiers, no matter which path
/// produced them.
#[derive(Clone, Debug, Default)]
pub struct KeyEvent {
    ch: String,
    keyname: String,
    state: ModifierState,
}

impl KeyEvent {
    /// Build an event directly; `ch` is upper-cased for Control/Meta chords
    ///
    /// Characters whose upper-case form is longer (`ß` -> `SS`) are stored as
    /// given. The descriptor still upper-cases them.
    pub fn new(ch: impl Into<String>, keyname: impl Into<String>, state: ModifierState) -> Self {
        let mut ch = ch.into();
        if state.forces_upper() {
            let upper = ch.to_uppercase();
            if upper.chars().count() == ch.chars().count() {
                ch = upper;
            }
        }
        Self {
            ch,
            keyname: keyname.into(),
            state,
        }
    }

    /// A plain character key
    pub fn char(c: char, state: ModifierState) -> Self {
        Self::new(c.to_string(), "", state)
    }

    /// A symbolic key such as `tab` or `f1`
    pub fn named(keyname: impl Into<String>, state: ModifierState) -> Self {
        Self::new("", keyname, state)
    }

    /// Assemble an event without the chord upper-casing of [`KeyEvent::new`]
    pub(crate) fn from_parts(ch: String, keyname: String, state: ModifierState) -> Self {
        Self { ch, keyname, state }
    }

    /// The character as produced by the construction path (may be empty)
    pub fn ch(&self) -> &str {
        &self.ch
    }

    /// The symbolic key name (may be empty)
    pub fn keyname(&self) -> &str {
        &self.keyname
    }

    pub fn state(&self) -> ModifierState {
        self.state
    }

    pub fn descriptor_source(&self) -> DescriptorSource {
        if !self.keyname.is_empty() {
            DescriptorSource::Keyname
        } else if self.state.forces_upper() {
            DescriptorSource::CharUpper
        } else {
            DescriptorSource::Char
        }
    }

    /// The canonical "which key" string
    ///
    /// `keyname` when set, otherwise `ch`, upper-cased for Control/Meta chords.
    pub fn descriptor(&self) -> Cow<'_, str> {
        match self.descriptor_source() {
            DescriptorSource::Keyname => Cow::Borrowed(&self.keyname),
            DescriptorSource::CharUpper => Cow::Owned(self.ch.to_uppercase()),
            DescriptorSource::Char => Cow::Borrowed(&self.ch),
        }
    }

    /// `(control, meta, shift, descriptor)`, the identity used for comparison
    pub fn to_tuple(&self) -> (bool, bool, bool, Cow<'_, str>) {
        (
            self.state.control,
            self.state.meta,
            self.state.shift,
            self.descriptor(),
        )
    }

    pub fn to_record(&self) -> KeyRecord {
        KeyRecord {
            control: self.state.control,
            meta: self.state.meta,
            shift: self.state.shift,
            desc: self.descriptor().into_owned(),
            dsrc: self.descriptor_source(),
        }
    }

    /// Debug form of the canonical tuple, e.g. `(true,false,false,C)`
    pub fn tuple_string(&self) -> String {
        let (control, meta, shift, desc) = self.to_tuple();
        format!("({},{},{},{})", control, meta, shift, desc)
    }
}

impl PartialEq for KeyEvent {
    fn eq(&self, other: &Self) -> bool {
        self.to_tuple() == other.to_tuple()
    }
}

impl Eq for KeyEvent {}

impl Hash for KeyEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_tuple().hash(state);
    }
}

/// Renders a binding description that parses back to an equal event
impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = self.descriptor();
        // A multi-char upper-case form would parse as a key name
        if self.keyname.is_empty() && desc.chars().count() > 1 {
            return write!(f, "{}{}", self.state, self.ch);
        }
        write!(f, "{}{}", self.state, desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(event: &KeyEvent) -> u64 {
        let mut hasher = DefaultHasher::new();
        event.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_from_code_matches_bits() {
        for code in 0..=0xFFu32 {
            let state = ModifierState::from_code(code).unwrap();
            assert_eq!(state.shift, code & 1 != 0);
            assert_eq!(state.control, code & 2 != 0);
            assert_eq!(state.meta, code & 4 != 0);
        }
    }

    #[test]
    fn test_from_code_rejects_wide_codes() {
        assert_eq!(
            ModifierState::from_code(0x100),
            Err(KeyError::CodeOutOfRange(0x100))
        );
    }

    #[test]
    fn test_to_record() {
        let record = ModifierState::new(true, false, true).to_record();
        assert_eq!(record["shift"], true);
        assert_eq!(record["control"], false);
        assert_eq!(record["meta"], true);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_union_only_adds() {
        let combined = ModifierState::SHIFT | ModifierState::CONTROL;
        assert!(combined.shift && combined.control && !combined.meta);
        assert_eq!(ModifierState::NONE | ModifierState::NONE, ModifierState::NONE);
        assert!(ModifierState::NONE.is_empty());
        assert!(!combined.is_empty());
    }

    #[test]
    fn test_new_uppercases_chorded_char() {
        let event = KeyEvent::new("c", "", ModifierState::CONTROL);
        assert_eq!(event.ch(), "C");

        let event = KeyEvent::new("c", "", ModifierState::SHIFT);
        assert_eq!(event.ch(), "c");
    }

    #[test]
    fn test_descriptor_prefers_keyname() {
        let event = KeyEvent::new("x", "tab", ModifierState::CONTROL);
        assert_eq!(event.descriptor(), "tab");
        assert_eq!(event.descriptor_source(), DescriptorSource::Keyname);
    }

    #[test]
    fn test_descriptor_source_is_ignored_by_equality() {
        let from_parts = KeyEvent::from_parts("c".into(), String::new(), ModifierState::CONTROL);
        let direct = KeyEvent::new("C", "", ModifierState::CONTROL);
        assert_eq!(from_parts, direct);
        assert_eq!(hash_of(&from_parts), hash_of(&direct));
    }

    #[test]
    fn test_flags_take_part_in_equality() {
        let chord = KeyEvent::char('a', ModifierState::CONTROL);
        let plain = KeyEvent::char('A', ModifierState::NONE);
        assert_eq!(chord.descriptor(), plain.descriptor());
        assert_ne!(chord, plain);
    }

    #[test]
    fn test_tuple_string() {
        let event = KeyEvent::char('c', ModifierState::CONTROL);
        assert_eq!(event.tuple_string(), "(true,false,false,C)");
    }

    #[test]
    fn test_display() {
        let event = KeyEvent::named("tab", ModifierState::new(true, false, true));
        assert_eq!(event.to_string(), "Meta-Shift-tab");
        assert_eq!(KeyEvent::char('q', ModifierState::NONE).to_string(), "q");
    }

    #[test]
    fn test_display_keeps_char_with_long_upper_form() {
        let event = KeyEvent::char('ß', ModifierState::CONTROL);
        assert_eq!(event.ch(), "ß");
        assert_eq!(event.descriptor(), "SS");
        assert_eq!(event.to_string(), "Control-ß");
        assert_eq!(event.to_string().parse::<KeyEvent>().unwrap(), event);
    }

    #[test]
    fn test_record_serializes() {
        let record = KeyEvent::char('x', ModifierState::META).to_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["desc"], "X");
        assert_eq!(json["dsrc"], "char-upper");
        assert_eq!(json["meta"], true);
    }
}
