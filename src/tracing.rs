//! Tracing setup for the keypress binary
//!
//! `RUST_LOG` wins when set (`RUST_LOG=keypress::keymap=trace`). Without it
//! the console level follows the `-v` count: warn, info, debug, trace.
//!
//! Unless disabled, a debug-level copy goes to
//! `<config>/logs/keypress.log`, rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console level for a given number of `-v` flags
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, log_file: bool) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    // stderr keeps stdout free for command output
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbose > 1)
        .with_filter(console_filter);

    let file = if log_file {
        match crate::config_paths::ensure_logs_dir() {
            Ok(dir) => Some(
                fmt::layer()
                    .with_writer(tracing_appender::rolling::daily(dir, "keypress.log"))
                    .with_ansi(false)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("keypress=debug")),
            ),
            Err(e) => {
                eprintln!("keypress: file logging disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init();
}
