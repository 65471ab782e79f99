//! Tracing/logging initialization.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Builds the env filter: `RUST_LOG` when set, otherwise `info`, or `debug`
/// in debug mode
pub fn env_filter(debug: bool) -> EnvFilter {
    let default_level = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stdout through a non-blocking writer; keep the returned guard
/// alive for the lifetime of the process so buffered lines are flushed.
/// Subsequent calls leave the first subscriber in place.
pub fn init(json: bool, debug: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(writer);

    let result = if json {
        builder.json().with_target(false).try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Keeping the existing tracing subscriber: {}", e);
    }

    guard
}
