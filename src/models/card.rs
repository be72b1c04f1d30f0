//! Card model

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Text keyed by language code
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the text for a language
    pub fn with(mut self, lang: &str, text: &str) -> Self {
        self.0.insert(lang.to_string(), text.to_string());
        self
    }

    /// Text in exactly this language
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Text in `lang`, or in `fallback` when `lang` is missing
    pub fn resolve<'a>(&'a self, lang: &str, fallback: &str) -> &'a str {
        self.get(lang)
            .or_else(|| self.get(fallback))
            .unwrap_or_default()
    }

    /// All `(language, text)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for LocalizedText {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// A single tarot card
///
/// The fallback-language name doubles as the card's identity in history and
/// lookups; the catalog does not carry a separate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: LocalizedText,
    pub meaning: LocalizedText,
    pub image: String,
}

impl Card {
    /// Identity of the card: its name in the fallback language
    pub fn identity<'a>(&'a self, fallback: &str) -> Option<&'a str> {
        self.name.get(fallback)
    }

    pub fn display_name<'a>(&'a self, lang: &str, fallback: &str) -> &'a str {
        self.name.resolve(lang, fallback)
    }

    pub fn display_meaning<'a>(&'a self, lang: &str, fallback: &str) -> &'a str {
        self.meaning.resolve(lang, fallback)
    }
}
