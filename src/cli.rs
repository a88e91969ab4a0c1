//! Command-line argument parsing for the keypress tool
//!
//! Supports:
//! - Describing binding strings in canonical form
//! - Decoding raw console key events
//! - Mapping characters through the keyboard layout
//! - Validating keymap files

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect how keys are normalized
#[derive(Parser, Debug)]
#[command(name = "keypress", version, about = "Inspect key-event normalization")]
pub struct CliArgs {
    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Don't write the rolling log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Parse binding descriptions (e.g. "Control-c", "\C-x", "f1")
    Describe {
        #[arg(value_name = "BINDING", required = true)]
        bindings: Vec<String>,

        /// Print JSON records instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a raw console event: character, control-key state, virtual key code
    Raw {
        /// Character the console composed (may be empty)
        #[arg(value_name = "CHAR")]
        ch: String,

        /// Control-key state bits (decimal, 0x hex or 0b binary)
        #[arg(value_name = "STATE", value_parser = parse_int)]
        state: u32,

        /// Virtual key code (decimal, 0x hex or 0b binary)
        #[arg(value_name = "KEYCODE", value_parser = parse_int)]
        keycode: u32,

        /// Print a JSON record instead of text
        #[arg(long)]
        json: bool,
    },

    /// Map a character back to its physical key on the keyboard layout
    Layout {
        #[arg(value_name = "CHAR")]
        ch: char,

        /// Use the built-in US QWERTY table instead of the system layout
        #[arg(long)]
        us: bool,
    },

    /// Validate a keymap file (defaults to the user keymap)
    Check {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Skip bad bindings with a warning instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
}

/// Parse an integer written in decimal, `0x` hex or `0b` binary
pub fn parse_int(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u32::from_str_radix(bin, 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", s, e))
}
