//! Logging setup.
//!
//! Structured logging controlled by environment variables:
//!
//! - `DBWIRE_DEBUG=true|1|yes` - enable debug logging
//! - `DBWIRE_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `DBWIRE_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! [`init`] is a no-op unless one of the variables is set, and installs a
//! subscriber only when the `tracing-subscriber` feature is enabled;
//! otherwise the host application's subscriber (if any) receives the events.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `DBWIRE_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("DBWIRE_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `DBWIRE_LOG_LEVEL`.
///
/// Defaults to "debug" when `DBWIRE_DEBUG` is enabled, otherwise "warn".
pub fn log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("DBWIRE_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured output format from `DBWIRE_LOG_FORMAT`.
pub fn log_format() -> &'static str {
    env::var("DBWIRE_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging once at application startup. Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DBWIRE_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = log_level();
            let filter = EnvFilter::try_new(format!(
                "dbwire={level},dbwire_config={level},dbwire_dsn={level},dbwire_sqlx={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match log_format() {
                "pretty" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
            }

            tracing::info!(level = level, format = log_format(), "dbwire logging initialized");
        }
    });
}
