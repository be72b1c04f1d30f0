//! Reading history entries
//!
//! History is stored as plain card identities. Older data may hold whole
//! bilingual name records, or anything else JSON allows; such entries are
//! accepted when read and normalized before they go any further.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::card::{Card, LocalizedText};

/// A history entry as handed to the history tracker
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    /// Plain card identity
    Canonical(String),
    /// Bilingual name record
    LegacyBilingual(LocalizedText),
}

impl HistoryEntry {
    /// Reduce the entry to the card identity in the fallback language
    pub fn normalize(&self, fallback: &str) -> String {
        match self {
            HistoryEntry::Canonical(identity) => identity.clone(),
            HistoryEntry::LegacyBilingual(names) => match names.get(fallback) {
                Some(identity) => identity.to_string(),
                None => {
                    let map: Map<String, Value> = names
                        .iter()
                        .map(|(lang, text)| (lang.to_string(), Value::String(text.to_string())))
                        .collect();
                    Value::Object(map).to_string()
                }
            },
        }
    }
}

impl From<&str> for HistoryEntry {
    fn from(identity: &str) -> Self {
        HistoryEntry::Canonical(identity.to_string())
    }
}

impl From<String> for HistoryEntry {
    fn from(identity: String) -> Self {
        HistoryEntry::Canonical(identity)
    }
}

impl From<&Card> for HistoryEntry {
    fn from(card: &Card) -> Self {
        HistoryEntry::LegacyBilingual(card.name.clone())
    }
}

/// A history entry exactly as found on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredHistoryEntry {
    Canonical(String),
    LegacyBilingual(Map<String, Value>),
    Other(Value),
}

impl From<Value> for StoredHistoryEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(identity) => StoredHistoryEntry::Canonical(identity),
            Value::Object(record) => StoredHistoryEntry::LegacyBilingual(record),
            other => StoredHistoryEntry::Other(other),
        }
    }
}

impl StoredHistoryEntry {
    /// Reduce the stored shape to a plain card identity
    pub fn normalize(&self, fallback: &str) -> String {
        match self {
            StoredHistoryEntry::Canonical(identity) => identity.clone(),
            StoredHistoryEntry::LegacyBilingual(record) => match record.get(fallback) {
                Some(Value::String(identity)) => identity.clone(),
                Some(other) => other.to_string(),
                None => Value::Object(record.clone()).to_string(),
            },
            StoredHistoryEntry::Other(value) => value.to_string(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, StoredHistoryEntry::Canonical(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_shapes_are_recognized() {
        let entries: Vec<StoredHistoryEntry> =
            serde_json::from_value(json!(["The Sun", {"en": "The Moon", "ru": "Луна"}, 7])).unwrap();

        assert!(entries[0].is_canonical());
        assert!(matches!(entries[1], StoredHistoryEntry::LegacyBilingual(_)));
        assert!(matches!(entries[2], StoredHistoryEntry::Other(_)));
    }

    #[test]
    fn test_stored_normalization() {
        let entries: Vec<StoredHistoryEntry> = serde_json::from_value(json!([
            "The Sun",
            {"en": "The Moon", "ru": "Луна"},
            {"ru": "Башня"},
            7
        ]))
        .unwrap();

        let normalized: Vec<String> = entries.iter().map(|e| e.normalize("en")).collect();
        assert_eq!(normalized, vec!["The Sun", "The Moon", r#"{"ru":"Башня"}"#, "7"]);
    }

    #[test]
    fn test_input_normalization() {
        let bilingual = HistoryEntry::LegacyBilingual(
            LocalizedText::new().with("en", "The Star").with("ru", "Звезда"),
        );
        assert_eq!(bilingual.normalize("en"), "The Star");
        assert_eq!(HistoryEntry::from("Death").normalize("en"), "Death");
    }

    #[test]
    fn test_canonical_serializes_as_plain_string() {
        let entry = StoredHistoryEntry::Canonical("The World".to_string());
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!("The World"));
    }
}
