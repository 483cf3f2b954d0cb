//! Tracing subscriber setup for the `datafile` binary.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` if set, else `debug` when verbose,
/// else the configured level.
pub fn build_filter(configured: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { configured };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber. Records from the `log` facade used by the
/// library crates are forwarded to it.
pub fn init(configured: &str, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured, verbose))
        .with_writer(std::io::stderr)
        .init();
}
