//! Static key tables: symbolic key names, escape aliases, and the
//! virtual-key-code to symbol mapping

/// Every symbolic key name a binding description may use
#[rustfmt::skip]
pub static VALID_KEYS: &[&str] = &[
    "cancel", "backspace", "tab", "clear",
    "return", "shift_l", "control_l", "alt_l",
    "pause", "caps_lock", "escape", "space",
    "prior", "next", "end", "home",
    "left", "up", "right", "down",
    "select", "print", "execute", "snapshot",
    "insert", "delete", "help", "f1",
    "f2", "f3", "f4", "f5",
    "f6", "f7", "f8", "f9",
    "f10", "f11", "f12", "f13",
    "f14", "f15", "f16", "f17",
    "f18", "f19", "f20", "f21",
    "f22", "f23", "f24", "num_lock",
    "scroll_lock", "vk_apps", "vk_processkey", "vk_attn",
    "vk_crsel", "vk_exsel", "vk_ereof", "vk_play",
    "vk_zoom", "vk_noname", "vk_pa1", "vk_oem_clear",
    "numpad0", "numpad1", "numpad2", "numpad3",
    "numpad4", "numpad5", "numpad6", "numpad7",
    "numpad8", "numpad9", "divide", "multiply",
    "add", "subtract", "vk_decimal",
];

/// Escape sequences and shorthands that stand for a symbolic key
///
/// Matched exactly against the remaining binding text. Targets must not
/// themselves appear as aliases.
pub static ESCAPE_ALIASES: &[(&str, &str)] = &[
    ("\\e[a", "up"),
    ("\\e[b", "down"),
    ("del", "delete"),
];

/// Windows virtual-key codes and the symbolic names they decode to
pub static VIRTUAL_KEY_SYMBOLS: &[(u32, &str)] = &[
    (0x03, "cancel"),
    (0x08, "backspace"),
    (0x09, "tab"),
    (0x0C, "clear"),
    (0x0D, "return"),
    (0x10, "shift_l"),
    (0x11, "control_l"),
    (0x12, "alt_l"),
    (0x13, "pause"),
    (0x14, "caps_lock"),
    (0x1B, "escape"),
    (0x20, "space"),
    (0x21, "prior"),
    (0x22, "next"),
    (0x23, "end"),
    (0x24, "home"),
    (0x25, "left"),
    (0x26, "up"),
    (0x27, "right"),
    (0x28, "down"),
    (0x29, "select"),
    (0x2A, "print"),
    (0x2B, "execute"),
    (0x2C, "snapshot"),
    (0x2D, "insert"),
    (0x2E, "delete"),
    (0x2F, "help"),
    (0x5D, "vk_apps"),
    (0x60, "numpad0"),
    (0x61, "numpad1"),
    (0x62, "numpad2"),
    (0x63, "numpad3"),
    (0x64, "numpad4"),
    (0x65, "numpad5"),
    (0x66, "numpad6"),
    (0x67, "numpad7"),
    (0x68, "numpad8"),
    (0x69, "numpad9"),
    (0x6A, "multiply"),
    (0x6B, "add"),
    (0x6D, "subtract"),
    (0x6E, "vk_decimal"),
    (0x6F, "divide"),
    (0x70, "f1"),
    (0x71, "f2"),
    (0x72, "f3"),
    (0x73, "f4"),
    (0x74, "f5"),
    (0x75, "f6"),
    (0x76, "f7"),
    (0x77, "f8"),
    (0x78, "f9"),
    (0x79, "f10"),
    (0x7A, "f11"),
    (0x7B, "f12"),
    (0x7C, "f13"),
    (0x7D, "f14"),
    (0x7E, "f15"),
    (0x7F, "f16"),
    (0x80, "f17"),
    (0x81, "f18"),
    (0x82, "f19"),
    (0x83, "f20"),
    (0x84, "f21"),
    (0x85, "f22"),
    (0x86, "f23"),
    (0x87, "f24"),
    (0x90, "num_lock"),
    (0x91, "scroll_lock"),
    (0xE5, "vk_processkey"),
    (0xF6, "vk_attn"),
    (0xF7, "vk_crsel"),
    (0xF8, "vk_exsel"),
    (0xF9, "vk_ereof"),
    (0xFA, "vk_play"),
    (0xFB, "vk_zoom"),
    (0xFC, "vk_noname"),
    (0xFD, "vk_pa1"),
    (0xFE, "vk_oem_clear"),
];

/// Look up a symbolic key name, ignoring case and surrounding whitespace
///
/// Returns the canonical (lower-case) spelling from [`VALID_KEYS`].
pub fn valid_key(name: &str) -> Option<&'static str> {
    let name = name.trim();
    VALID_KEYS
        .iter()
        .copied()
        .find(|key| key.eq_ignore_ascii_case(name))
}

/// Exact-match lookup in the escape alias table
pub fn escape_alias(text: &str) -> Option<&'static str> {
    ESCAPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == text)
        .map(|(_, target)| *target)
}

/// Symbolic name for a virtual-key code; unmapped codes are `None`
pub fn symbol_for_code(code: u32) -> Option<&'static str> {
    VIRTUAL_KEY_SYMBOLS
        .iter()
        .find(|(vk, _)| *vk == code)
        .map(|(_, name)| *name)
}
