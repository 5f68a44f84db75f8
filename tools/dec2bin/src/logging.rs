//! Logging setup for dec2bin

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr, keeping stdout for results.
///
/// `RUST_LOG` takes priority over the `verbose` flag.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
