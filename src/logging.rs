//! Diagnostic logging.
//!
//! User-facing status lines go through `ui::messages`; this is the
//! `tracing` side, written to stderr and filtered with `RUST_LOG`
//! (default: warn), e.g. `RUST_LOG=prodwatch=debug`.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (library users, tests) is a no-op
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Verbose subscriber for tests, captured by the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
