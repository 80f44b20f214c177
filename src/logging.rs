// ==========================================
// Logging setup
// ==========================================
// tracing + tracing-subscriber, level from the environment.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the log system.
///
/// # Environment
/// - RUST_LOG: filter string (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=analise_full=trace
///
/// # Example
/// ```no_run
/// use analise_full::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialize logging for tests, more verbose and idempotent.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
