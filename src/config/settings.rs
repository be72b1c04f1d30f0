//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub deck: DeckConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Locations of the JSON state files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub language_file: String,
    pub daily_file: String,
    pub history_file: String,
    pub stats_file: String,
}

/// Card catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeckConfig {
    pub cards_path: String,
    /// How many of the most recent readings the history view shows
    pub history_display_limit: usize,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_prefix: String,
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TAROT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TarotError> {
        super::validation::validate_settings(self)
    }
}

impl StorageConfig {
    fn path_of(&self, file: &str) -> PathBuf {
        PathBuf::from(&self.data_dir).join(file)
    }

    pub fn language_path(&self) -> PathBuf {
        self.path_of(&self.language_file)
    }

    pub fn daily_path(&self) -> PathBuf {
        self.path_of(&self.daily_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.path_of(&self.history_file)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.path_of(&self.stats_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            storage: StorageConfig {
                data_dir: ".".to_string(),
                language_file: "user_lang.json".to_string(),
                daily_file: "daily_limits.json".to_string(),
                history_file: "history.json".to_string(),
                stats_file: "stats.json".to_string(),
            },
            deck: DeckConfig {
                cards_path: "data/cards.json".to_string(),
                history_display_limit: 10,
            },
            i18n: I18nConfig {
                default_language: "en".to_string(),
                supported_languages: vec!["en".to_string(), "ru".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
                file_prefix: "dailytarot.log".to_string(),
            },
        }
    }
}
