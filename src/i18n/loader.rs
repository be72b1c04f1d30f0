//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality:
//! loading per-language JSON tables and resolving message keys against them.
//! A key that cannot be resolved comes back verbatim, so a missing translation
//! is visible in the chat instead of failing the interaction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::{TarotError, Result};
use crate::config::I18nConfig;

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    /// Directory holding `<lang>.json` files
    translations_dir: PathBuf,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            translations_dir: PathBuf::from(&config.translations_dir),
        }
    }

    /// Load all translation files from the translations directory
    pub async fn load_translations(&mut self) -> Result<()> {
        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = self.translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                match self.load_language_file(&file_path, lang_code).await {
                    Ok(_) => info!("Loaded translations for language: {}", lang_code),
                    Err(e) => {
                        error!("Failed to load translations for {}: {}", lang_code, e);
                        if lang_code == &self.default_language {
                            return Err(TarotError::Config(
                                format!("Failed to load default language translations: {}", e)
                            ));
                        }
                    }
                }
            } else {
                warn!("Translation file not found: {}", file_path.display());
                if lang_code == &self.default_language {
                    return Err(TarotError::Config(
                        format!("Default language translation file not found: {}", file_path.display())
                    ));
                }
            }
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let translations: Value = serde_json::from_str(&content)?;

        if let Value::Object(map) = translations {
            debug!("Loaded {} translation keys for {}", map.len(), lang_code);
            self.translations.insert(lang_code.to_string(), map);
        } else {
            return Err(TarotError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ));
        }

        Ok(())
    }

    /// Get a translated message
    ///
    /// There is no cross-language fallback: an unknown language or a key
    /// missing from that language's table yields the key itself.
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        match self.get_translation_value(key, lang) {
            Some(Value::String(text)) => self.format_message(text, params),
            Some(other) => self.format_message(&other.to_string(), params),
            None => {
                warn!(key = key, lang = lang, "Translation key not found");
                key.to_string()
            }
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let translations = self.translations.get(lang)?;

        // Support nested keys like "menu.daily"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;

        for k in parts {
            current = current.get(k)?;
        }

        Some(current)
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Top-level keys loaded for a language, sorted
    #[cfg(test)]
    pub fn keys(&self, lang: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .translations
            .get(lang)
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}
