//! Diagnostics setup for binary hosts. Library consumers install their
//! own subscriber; this is only called from `main`.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber, honoring `RUST_LOG` and defaulting
/// to `info`. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
