//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the DailyTarot bot.

use tracing::{info, debug, warn, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{TarotError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so keep it alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| TarotError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a card that was drawn for a user
pub fn log_card_drawn(user_id: i64, command: &str, card: &str) {
    info!(
        user_id = user_id,
        command = command,
        card = card,
        "Card drawn"
    );
}

/// Log store writes
pub fn log_store_write(store: &str, entries: usize) {
    debug!(
        store = store,
        entries = entries,
        "Store persisted"
    );
}

/// Log a failed update once, at a level matching how serious it is
pub fn log_handler_error(error: &TarotError, context: &str) {
    if error.is_recoverable() {
        warn!(error = %error, "{}", context);
    } else {
        error!(error = %error, "{}", context);
    }
}
