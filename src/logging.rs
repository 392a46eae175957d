// Diagnostics go to stderr so stdout stays a clean status stream

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filter comes from RUST_LOG, default `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
