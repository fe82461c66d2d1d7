//! Tracing and logging (shared setup).
//!
//! Rejection notices from the invoice state machine are `info` events, so the
//! default filter shows them on the console (stderr unless configured
//! otherwise).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::LogConfig::from_env());
}

/// Environment-driven logging configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogConfig, LogFormat, LogTarget};
