//! Binding-description parser: `"Control-c"`, `"\C-x"`, `"Meta-Shift-f1"`, `"a"`

use std::str::FromStr;

use super::keysyms::{escape_alias, valid_key};
use super::types::{KeyEvent, ModifierState};
use crate::error::{KeyError, Result};

#[derive(Clone, Copy)]
enum Modifier {
    Shift,
    Control,
    Meta,
}

impl Modifier {
    fn apply(self, state: &mut ModifierState) {
        match self {
            Modifier::Shift => state.shift = true,
            Modifier::Control => state.control = true,
            Modifier::Meta => state.meta = true,
        }
    }
}

/// Prefixes tried before the escape-alias table
const LEADING_PREFIXES: &[(&str, Modifier)] = &[
    ("control-", Modifier::Control),
    ("ctrl-", Modifier::Control),
    ("\\c-", Modifier::Control),
    ("\\m-", Modifier::Meta),
];

/// Prefixes tried after the escape-alias table
const TRAILING_PREFIXES: &[(&str, Modifier)] = &[
    ("meta-", Modifier::Meta),
    ("alt-", Modifier::Meta),
    ("shift-", Modifier::Shift),
];

fn match_prefix(text: &str, prefixes: &[(&str, Modifier)]) -> Option<(usize, Modifier)> {
    prefixes.iter().find_map(|(prefix, modifier)| {
        text.get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| (prefix.len(), *modifier))
    })
}

/// Strip one layer of surrounding double quotes
fn unquote(descr: &str) -> &str {
    if descr.chars().count() > 2 {
        if let Some(inner) = descr.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
            return inner;
        }
    }
    descr
}

/// Parse a binding description into a KeyEvent
///
/// Modifier prefixes are stripped greedily from the front, case-insensitively,
/// in a fixed order (`control-`, `ctrl-`, `\c-`, `\m-`, escape alias,
/// `meta-`, `alt-`, `shift-`). Whatever remains is either a single character
/// (possibly empty), taken verbatim, or a symbolic key name.
///
/// At most one escape alias is substituted per description, so the loop
/// always shrinks the text or stops.
pub fn parse_key_descr(descr: &str) -> Result<KeyEvent> {
    let mut rest = unquote(descr);
    let mut state = ModifierState::NONE;
    let mut aliased = false;

    loop {
        if let Some((len, modifier)) = match_prefix(rest, LEADING_PREFIXES) {
            modifier.apply(&mut state);
            rest = &rest[len..];
            continue;
        }
        if !aliased {
            if let Some(target) = escape_alias(rest) {
                rest = target;
                aliased = true;
                continue;
            }
        }
        if let Some((len, modifier)) = match_prefix(rest, TRAILING_PREFIXES) {
            modifier.apply(&mut state);
            rest = &rest[len..];
            continue;
        }
        break;
    }

    if rest.chars().count() > 1 {
        let keyname = valid_key(rest).ok_or_else(|| KeyError::InvalidKeyName(rest.to_string()))?;
        Ok(KeyEvent::from_parts(String::new(), keyname.to_string(), state))
    } else {
        Ok(KeyEvent::from_parts(rest.to_string(), String::new(), state))
    }
}

impl KeyEvent {
    /// Build an event from a keymap binding description
    pub fn from_descr(descr: &str) -> Result<Self> {
        parse_key_descr(descr)
    }
}

impl FromStr for KeyEvent {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        parse_key_descr(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(descr: &str) -> KeyEvent {
        parse_key_descr(descr).unwrap()
    }

    #[test]
    fn test_control_spellings_agree() {
        let a = parse("Control-c");
        let b = parse("ctrl-c");
        let c = parse("\\C-c");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(a.state().control);
        assert!(!a.state().meta);
        assert!(!a.state().shift);
        assert_eq!(a.descriptor(), "C");
    }

    #[test]
    fn test_char_is_kept_verbatim() {
        let event = parse("Control-c");
        assert_eq!(event.ch(), "c");
    }

    #[test]
    fn test_meta_spellings_agree() {
        assert_eq!(parse("Meta-x"), parse("alt-x"));
        assert_eq!(parse("alt-x"), parse("\\M-x"));
        assert!(parse("ALT-x").state().meta);
    }

    #[test]
    fn test_stacked_prefixes() {
        let event = parse("Control-Meta-Shift-q");
        assert_eq!(event.state(), ModifierState::new(true, true, true));
        assert_eq!(event.descriptor(), "Q");

        let event = parse("shift-ctrl-f5");
        assert!(event.state().shift && event.state().control);
        assert_eq!(event.keyname(), "f5");
    }

    #[test]
    fn test_function_key() {
        let event = parse("f1");
        assert_eq!(event.keyname(), "f1");
        assert_eq!(event.ch(), "");
    }

    #[test]
    fn test_unknown_multi_char_key_fails() {
        assert_eq!(
            parse_key_descr("123"),
            Err(KeyError::InvalidKeyName("123".to_string()))
        );
        assert!(parse_key_descr("Control-bogus").is_err());
    }

    #[test]
    fn test_escape_alias() {
        assert_eq!(parse("\\e[a"), parse("up"));
        assert_eq!(parse("\\e[b"), parse("down"));
        assert_eq!(parse("del").keyname(), "delete");
        assert_eq!(parse("Control-del"), parse("ctrl-delete"));
    }

    #[test]
    fn test_keyname_is_case_insensitive() {
        let lower = parse("tab");
        assert_eq!(parse("Tab"), lower);
        assert_eq!(parse("TAB"), lower);
        assert_eq!(parse("TAB").keyname(), "tab");
    }

    #[test]
    fn test_surrounding_quotes_are_stripped_once() {
        assert_eq!(parse("\"Control-c\""), parse("Control-c"));
        // Two characters: not treated as quoted
        assert_eq!(parse_key_descr("\"\"").unwrap_err(), KeyError::InvalidKeyName("\"\"".into()));
        // Single quote character is a plain key
        assert_eq!(parse("\"").ch(), "\"");
    }

    #[test]
    fn test_dash_and_empty_remainders() {
        let dash = parse("Control--");
        assert_eq!(dash.ch(), "-");
        assert!(dash.state().control);

        let empty = parse("Control-");
        assert_eq!(empty.ch(), "");
        assert_eq!(empty.keyname(), "");

        assert_eq!(parse("").descriptor(), "");
    }

    #[test]
    fn test_from_str() {
        let event: KeyEvent = "Meta-Shift-tab".parse().unwrap();
        assert_eq!(event, KeyEvent::named("tab", ModifierState::new(true, false, true)));
    }

    #[test]
    fn test_display_round_trips() {
        for descr in ["Control-c", "Meta-Shift-tab", "a", "Shift-a", "\\M-\\C-f12", "Control--"] {
            let event = parse(descr);
            assert_eq!(parse(&event.to_string()), event, "{}", descr);
        }
    }

    #[test]
    fn test_non_ascii_char() {
        let event = parse("Meta-é");
        assert_eq!(event.descriptor(), "É");
        assert!(event.state().meta);
    }
}
