//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs:
//!
//! ```yaml
//! bindings:
//!   - key: "Control-a"
//!     command: beginning-of-line
//!   - key: "\\M-f"
//!     command: forward-word
//!     platform: windows
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::binding::Keybinding;
use super::keymap::Keymap;
use super::types::KeyEvent;
use crate::error::KeyError;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// What to do with a binding whose key or command is unusable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort loading at the first bad binding
    #[default]
    Strict,
    /// Log a warning and drop the binding
    Skip,
}

/// Errors that can occur when loading keymaps
#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid key '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: KeyError,
    },

    #[error("empty command for key '{0}'")]
    EmptyCommand(String),
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path, policy: LoadPolicy) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bindings = parse_keymap_yaml(&content, policy)?;
    tracing::info!(
        "Loaded keymap from {} ({} bindings)",
        path.display(),
        bindings.len()
    );
    Ok(bindings)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str, policy: LoadPolicy) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig = serde_yaml::from_str(yaml)?;

    let current_platform = get_current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        // Skip if platform-specific and doesn't match current platform
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        match parse_binding(&entry) {
            Ok(binding) => {
                tracing::debug!(key = %binding.key, command = %binding.command, "parsed binding");
                bindings.push(binding);
            }
            Err(e) if policy == LoadPolicy::Skip => {
                tracing::warn!("Skipping keymap binding: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(bindings)
}

fn parse_binding(entry: &BindingConfig) -> Result<Keybinding, KeymapError> {
    let key = KeyEvent::from_descr(&entry.key).map_err(|source| KeymapError::InvalidKey {
        key: entry.key.clone(),
        source,
    })?;

    let command = entry.command.trim();
    if command.is_empty() {
        return Err(KeymapError::EmptyCommand(entry.key.clone()));
    }

    Ok(Keybinding::new(key, command))
}

/// Load the user's keymap, if one exists
///
/// Returns `Ok(None)` when there is no config directory or no keymap file.
pub fn load_user_keymap(policy: LoadPolicy) -> Result<Option<Keymap>, KeymapError> {
    let Some(path) = crate::config_paths::keymap_file() else {
        tracing::debug!("No config directory available, no user keymap");
        return Ok(None);
    };

    if !path.exists() {
        tracing::debug!("Keymap file not found at {}", path.display());
        return Ok(None);
    }

    let bindings = load_keymap_file(&path, policy)?;
    Ok(Some(Keymap::with_bindings(bindings)))
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}
