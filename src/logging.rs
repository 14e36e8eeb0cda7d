// src/logging.rs
// =============================================================================
// Sets up `tracing` output for progress lines and operator diagnostics.
//
// Logs go to stderr so they never interleave with the broken-link blocks and
// the summary printed on stdout. RUST_LOG wins over --verbose when set.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init: a second call (e.g. from tests) is a no-op rather than a panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
