//! Shared logging utilities for consistent tracing across crates

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Filter directive for the service crates at the given base level
pub fn default_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("dashboard={base_level},curator={base_level},shared={base_level},tower_http=debug,reqwest=warn")
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the per-crate default filter is used.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(service: &str, details: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service: &str, reason: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = service,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service: &str, message: &str) {
    info!(
        service = service,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
