use crate::config::{DEFAULT_LOG_FILTER, ENV_LOG};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. Stdout carries job data only.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // no colour codes when stderr is captured into task logs
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
