//! Error handling for DailyTarot
//!
//! This module defines the main error type used throughout the bot
//! and the crate-wide `Result` alias.

use thiserror::Error;

/// Marker Telegram puts into the description of an expired callback query
const STALE_QUERY_MARKER: &str = "query is too old";

/// Main error type for DailyTarot
#[derive(Error, Debug)]
pub enum TarotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Not enough cards in the deck: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for DailyTarot operations
pub type Result<T> = std::result::Result<T, TarotError>;

impl TarotError {
    /// Check whether the error is Telegram rejecting an expired button click
    pub fn is_stale_interaction(&self) -> bool {
        match self {
            TarotError::Telegram(e) => e.to_string().contains(STALE_QUERY_MARKER),
            _ => false,
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TarotError::Telegram(_) => true,
            TarotError::Io(_) => true,
            TarotError::InsufficientCards { .. } => false,
            TarotError::UnsupportedLanguage(_) => true,
            TarotError::InvalidInput(_) => true,
            TarotError::Config(_) => false,
            TarotError::ConfigLoad(_) => false,
            TarotError::Serialization(_) => false,
        }
    }
}
