//! Adapter to convert crossterm key events to our KeyEvent type

use crossterm::event::{
    KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers,
};

use super::types::{KeyEvent, ModifierState};

/// Convert a crossterm key event to a normalized KeyEvent
///
/// Returns None for key releases and for keys without a symbolic name
/// (media keys, bare modifier presses, keypad begin).
pub fn key_event_from_crossterm(event: &CtKeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut state = ModifierState::new(
        event.modifiers.contains(KeyModifiers::SHIFT),
        event.modifiers.contains(KeyModifiers::CONTROL),
        event.modifiers.contains(KeyModifiers::ALT),
    );

    let keyname = match event.code {
        // Consoles report the space bar by its virtual-key name
        CtKeyCode::Char(' ') => "space",
        CtKeyCode::Char(c) => return Some(KeyEvent::char(c, state)),
        CtKeyCode::Backspace => "backspace",
        CtKeyCode::Enter => "return",
        CtKeyCode::Left => "left",
        CtKeyCode::Right => "right",
        CtKeyCode::Up => "up",
        CtKeyCode::Down => "down",
        CtKeyCode::Home => "home",
        CtKeyCode::End => "end",
        CtKeyCode::PageUp => "prior",
        CtKeyCode::PageDown => "next",
        CtKeyCode::Tab => "tab",
        CtKeyCode::BackTab => {
            state.shift = true;
            "tab"
        }
        CtKeyCode::Delete => "delete",
        CtKeyCode::Insert => "insert",
        CtKeyCode::Esc => "escape",
        CtKeyCode::CapsLock => "caps_lock",
        CtKeyCode::ScrollLock => "scroll_lock",
        CtKeyCode::NumLock => "num_lock",
        CtKeyCode::PrintScreen => "snapshot",
        CtKeyCode::Pause => "pause",
        CtKeyCode::Menu => "vk_apps",
        CtKeyCode::F(n) => return function_key(n).map(|name| KeyEvent::named(name, state)),
        _ => return None,
    };

    Some(KeyEvent::named(keyname, state))
}

fn function_key(n: u8) -> Option<&'static str> {
    const NAMES: [&str; 24] = [
        "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12", "f13", "f14",
        "f15", "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23", "f24",
    ];
    NAMES.get(usize::from(n).checked_sub(1)?).copied()
}
