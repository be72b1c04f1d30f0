//! Language preference service
//!
//! Stores each user's language choice and resolves message keys against it.

use std::sync::Arc;
use serde_json::Value;
use tracing::{info, warn, debug};
use crate::i18n::{I18n, TranslationParams};
use crate::storage::JsonStore;
use crate::utils::errors::{TarotError, Result};

/// Per-user language preferences and localized text resolution
#[derive(Clone)]
pub struct LanguageService {
    store: JsonStore,
    i18n: Arc<I18n>,
}

impl LanguageService {
    /// Create a new LanguageService instance
    pub fn new(store: JsonStore, i18n: I18n) -> Self {
        Self {
            store,
            i18n: Arc::new(i18n),
        }
    }

    /// Language of the user, or the default language if none was chosen
    pub async fn get_language(&self, user_id: i64) -> String {
        match self.store.get(&user_id.to_string()).await {
            Some(Value::String(code)) => code,
            Some(other) => {
                debug!(user_id = user_id, stored = %other, "Stored language is not a string, using default");
                self.i18n.default_language().to_string()
            }
            None => self.i18n.default_language().to_string(),
        }
    }

    /// Persist the user's language choice
    pub async fn set_language(&self, user_id: i64, language_code: &str) -> Result<()> {
        debug!(user_id = user_id, language_code = %language_code, "Setting user language preference");

        if !self.i18n.is_language_supported(language_code) {
            warn!(user_id = user_id, language_code = %language_code, "Unsupported language code");
            return Err(TarotError::UnsupportedLanguage(language_code.to_string()));
        }

        let key = user_id.to_string();
        let code = Value::String(language_code.to_string());
        self.store.update(move |langs| {
            langs.insert(key, code);
        }).await?;

        info!(user_id = user_id, language_code = %language_code, "User language preference updated");
        Ok(())
    }

    /// Resolve a message key in the user's language
    pub async fn resolve(&self, user_id: i64, key: &str) -> String {
        self.resolve_with(user_id, key, None).await
    }

    /// Resolve a message key in the user's language, filling placeholders
    pub async fn resolve_with(&self, user_id: i64, key: &str, params: Option<&TranslationParams>) -> String {
        let lang = self.get_language(user_id).await;
        self.i18n.t(key, &lang, params)
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}
