//! DailyTarot Telegram Bot
//!
//! A Telegram bot serving tarot cards, spreads and a personal reading history
//! in English and Russian. This library provides the card catalog, the JSON
//! state stores, localization and the Telegram handlers built on them.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod storage;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TarotError, Result};

// Re-export main components for easy access
pub use services::{ServiceFactory, Deck};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
