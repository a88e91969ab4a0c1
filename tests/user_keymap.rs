//! User keymap discovery through the config directory
//!
//! Kept in its own test binary: it sets `KEYPRESS_CONFIG_DIR`, which every
//! config path lookup in the process reads.

mod common;

use common::{console_event, key};
use keypress::config_paths::{self, CONFIG_DIR_ENV};
use keypress::keymap::{load_user_keymap, LoadPolicy};
use keypress::ModifierState;

// ========================================================================
// KEYPRESS_CONFIG_DIR Tests
// ========================================================================

// One test so the env override never races another test in this binary
#[test]
fn test_user_keymap_follows_config_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(CONFIG_DIR_ENV, dir.path());

    assert_eq!(config_paths::config_dir().as_deref(), Some(dir.path()));
    assert_eq!(
        config_paths::keymap_file(),
        Some(dir.path().join("keymap.yaml"))
    );

    // No keymap.yaml yet
    assert!(load_user_keymap(LoadPolicy::Strict).unwrap().is_none());

    std::fs::write(
        dir.path().join("keymap.yaml"),
        r#"
bindings:
  - key: "Control-a"
    command: beginning-of-line
  - key: "space"
    command: insert-space
"#,
    )
    .unwrap();

    let keymap = load_user_keymap(LoadPolicy::Strict)
        .unwrap()
        .expect("keymap.yaml should be found");
    assert_eq!(keymap.len(), 2);
    assert_eq!(keymap.lookup(&key("\\C-a")), Some("beginning-of-line"));
    assert_eq!(
        keymap.lookup(&console_event(" ", ModifierState::NONE, 0x20)),
        Some("insert-space")
    );

    std::env::remove_var(CONFIG_DIR_ENV);
}
