//! Diagnostic logging.
//!
//! Logs go to stderr so stdout carries only the rendered prompt or JSON.
//! `BREAKDOWN_LOG` takes a full filter directive (e.g. `breakdown=debug`);
//! without it the `-v` count picks the level.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "BREAKDOWN_LOG";

/// Level for a `-v` count: none is `warn`, then `info`, `debug`, `trace`.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// A subscriber installed earlier (e.g. by a test harness) is left in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
