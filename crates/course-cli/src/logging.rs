//! Tracing setup.
//!
//! Output goes to stderr: stdout carries the MCP stdio transport.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `RUST_LOG`, then `--verbose`, then the
/// configured level.
pub fn filter_directive(rust_log: Option<String>, verbose: bool, configured: &str) -> String {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directive) => directive,
        None if verbose => "debug".to_string(),
        None => configured.to_string(),
    }
}

/// Install the global subscriber. A subscriber installed earlier is kept.
pub fn init(verbose: bool, configured: &str) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%directive, "Logging initialized");
    }
}
