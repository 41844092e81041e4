//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the console.

use std::path::Path;
use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{ExpoAdminError, Result};

/// Initialize logging based on configuration
///
/// The returned guard must be kept alive for as long as file logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ExpoAdminError::Config(format!("Invalid log filter: {}", e)))?;

    let guard = match config.file_path.as_deref() {
        Some(dir) if !dir.is_empty() => {
            let file_appender = tracing_appender::rolling::daily(Path::new(dir), "expo-admin.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
                .try_init()
                .map_err(|e| ExpoAdminError::Config(format!("Logging already initialized: {}", e)))?;
            Some(guard)
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .try_init()
                .map_err(|e| ExpoAdminError::Config(format!("Logging already initialized: {}", e)))?;
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a staff action against a resource
pub fn log_admin_action(role: &str, action: &str, resource: &str, target_id: Option<i64>) {
    warn!(
        role = role,
        action = action,
        resource = resource,
        target_id = target_id,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a completed backend request
pub fn log_request(method: &str, url: &str, status: u16, duration_ms: u64) {
    debug!(
        method = method,
        url = url,
        status = status,
        duration_ms = duration_ms,
        "Backend request completed"
    );
}
