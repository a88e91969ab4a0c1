//! Error types for key normalization

use thiserror::Error;

/// Errors raised while building a [`KeyEvent`](crate::keymap::KeyEvent)
///
/// Every variant is an invalid-input condition: the caller handed us a code,
/// character or description that has no canonical key. No partially built
/// event is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("code out of range (must be <= 0xFF, got {0:#x})")]
    CodeOutOfRange(u32),

    #[error("bad key: {0:?} has no mapping in the current keyboard layout")]
    BadKey(char),

    #[error("not a valid key: '{0}'")]
    InvalidKeyName(String),

    #[error("key code {0:#x} is not a valid character")]
    InvalidCodePoint(u32),

    #[error("virtual key {0:#04x} has neither a symbol nor a printable form")]
    UnprintableVirtualKey(u8),
}

pub type Result<T> = std::result::Result<T, KeyError>;
