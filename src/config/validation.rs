//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::utils::errors::{TarotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_deck_config(&settings.deck)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(TarotError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.data_dir.is_empty() {
        return Err(TarotError::Config(
            "Data directory is required".to_string()
        ));
    }

    let files = [
        &config.language_file,
        &config.daily_file,
        &config.history_file,
        &config.stats_file,
    ];

    if files.iter().any(|f| f.is_empty()) {
        return Err(TarotError::Config(
            "All store file names must be set".to_string()
        ));
    }

    let unique: HashSet<&String> = files.iter().copied().collect();
    if unique.len() != files.len() {
        return Err(TarotError::Config(
            "Store file names must be distinct".to_string()
        ));
    }

    Ok(())
}

/// Validate card catalog configuration
fn validate_deck_config(config: &super::DeckConfig) -> Result<()> {
    if config.cards_path.is_empty() {
        return Err(TarotError::Config(
            "Cards file path is required".to_string()
        ));
    }

    if config.history_display_limit == 0 {
        return Err(TarotError::Config(
            "History display limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(TarotError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(TarotError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(TarotError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TarotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TarotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
