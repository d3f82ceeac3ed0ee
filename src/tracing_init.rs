//! Tracing initialization for the CLI.
//!
//! Logs go to stderr so summaries on stdout stay machine-readable.

/// Initialize global tracing on stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from config) is used.
pub fn init_stderr_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}
