//! Diagnostics setup shared by the binaries.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
