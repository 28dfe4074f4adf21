//! Tracing subscriber setup for the `bookmark-saver` binary.
//!
//! Logs go to stderr; stdout carries the RPC protocol.
//!
//! Filter priority (highest first):
//! 1. `BOOKMARK_SAVER_LOG`
//! 2. `RUST_LOG`
//! 3. `logging.level` from settings

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BOOKMARK_SAVER_LOG";

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init_subscriber(default_directive: &str) {
    let filter = build_env_filter(default_directive);

    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Builds the filter from the process environment.
pub fn build_env_filter(default_directive: &str) -> EnvFilter {
    filter_from(
        std::env::var(LOG_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        default_directive,
    )
}

/// Picks the first directive set that parses; `info` if none does.
fn filter_from(project: Option<String>, rust_log: Option<String>, default_directive: &str) -> EnvFilter {
    [project.as_deref(), rust_log.as_deref(), Some(default_directive)]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
