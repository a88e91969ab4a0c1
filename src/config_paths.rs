//! Where keypress keeps its files
//!
//! `KEYPRESS_CONFIG_DIR` overrides the location outright. Otherwise:
//! - Unix/macOS: `$XDG_CONFIG_HOME/keypress/` or `~/.config/keypress/`
//! - Windows: `%APPDATA%\keypress\`

use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "keypress";

/// Environment variable that replaces the whole config directory
pub const CONFIG_DIR_ENV: &str = "KEYPRESS_CONFIG_DIR";

/// Base config directory, or `None` when no home can be determined
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// The user keymap, `<config>/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    Some(config_dir()?.join("keymap.yaml"))
}

/// Rolling log files, `<config>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory available"))?;
    std::fs::create_dir_all(&logs)?;
    Ok(logs)
}
