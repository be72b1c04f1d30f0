//! Reading history service
//!
//! Keeps an append-only log of drawn cards per user. Entries are stored as
//! fallback-language card names; older bilingual records are normalized by
//! [`HistoryService::cleanup`] when the bot starts.

use std::collections::BTreeMap;
use serde_json::Value;
use tracing::{info, debug};
use crate::models::{HistoryEntry, StoredHistoryEntry};
use crate::services::deck::Deck;
use crate::storage::JsonStore;
use crate::utils::errors::Result;

/// Per-user reading history
#[derive(Clone)]
pub struct HistoryService {
    store: JsonStore,
    fallback_language: String,
    display_limit: usize,
}

/// Entries of one user as found on disk
///
/// A lone value instead of a list is read as a one-entry history.
fn stored_entries(value: Value) -> Vec<StoredHistoryEntry> {
    match value {
        Value::Array(items) => items.into_iter().map(StoredHistoryEntry::from).collect(),
        Value::Null => Vec::new(),
        other => vec![StoredHistoryEntry::from(other)],
    }
}

impl HistoryService {
    pub fn new(store: JsonStore, fallback_language: &str, display_limit: usize) -> Self {
        Self {
            store,
            fallback_language: fallback_language.to_string(),
            display_limit,
        }
    }

    /// Append a reading to the user's history
    pub async fn append(&self, user_id: i64, entry: impl Into<HistoryEntry>) -> Result<()> {
        let identity = entry.into().normalize(&self.fallback_language);
        let fallback = self.fallback_language.clone();
        let key = user_id.to_string();

        debug!(user_id = user_id, card = %identity, "Appending to history");
        self.store.update(move |history| {
            let mut entries = match history.remove(&key) {
                Some(Value::Array(items)) => items,
                Some(other) => stored_entries(other)
                    .iter()
                    .map(|entry| Value::String(entry.normalize(&fallback)))
                    .collect(),
                None => Vec::new(),
            };

            entries.push(Value::String(identity));
            history.insert(key, Value::Array(entries));
        }).await
    }

    /// Rewrite every stored entry into its canonical form
    ///
    /// Returns how many entries were not canonical before.
    pub async fn cleanup(&self) -> Result<usize> {
        let fallback = self.fallback_language.clone();
        let rewritten = self.store.update(move |history| {
            let mut rewritten = 0;
            for value in history.values_mut() {
                let already_canonical = matches!(value, Value::Array(items) if items.iter().all(Value::is_string));
                if already_canonical {
                    continue;
                }

                let entries = stored_entries(value.take());
                rewritten += entries.iter().filter(|entry| !entry.is_canonical()).count();
                *value = Value::Array(
                    entries
                        .iter()
                        .map(|entry| Value::String(entry.normalize(&fallback)))
                        .collect(),
                );
            }
            rewritten
        }).await?;

        info!(rewritten = rewritten, "Reading history normalized");
        Ok(rewritten)
    }

    /// Full, unfiltered history of a user, oldest first
    pub async fn entries(&self, user_id: i64) -> Vec<String> {
        self.store
            .get(&user_id.to_string())
            .await
            .map(stored_entries)
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.normalize(&self.fallback_language))
            .collect()
    }

    /// The most recent readings in the display language, oldest of them first
    ///
    /// Names no longer present in the catalog are shown as stored.
    pub async fn render(&self, user_id: i64, display_language: &str, deck: &Deck) -> Vec<String> {
        let entries = self.entries(user_id).await;
        let window = &entries[entries.len().saturating_sub(self.display_limit)..];

        let cards = deck.snapshot().await;
        let names: BTreeMap<&str, &str> = cards
            .iter()
            .filter_map(|card| {
                card.identity(&self.fallback_language)
                    .map(|id| (id, card.display_name(display_language, &self.fallback_language)))
            })
            .collect();

        window
            .iter()
            .map(|identity| {
                names
                    .get(identity.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| identity.clone())
            })
            .collect()
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::models::{Card, LocalizedText};

    fn card(en: &str, ru: &str) -> Card {
        Card {
            name: LocalizedText::new().with("en", en).with("ru", ru),
            meaning: LocalizedText::new().with("en", "meaning"),
            image: String::new(),
        }
    }

    fn service(dir: &tempfile::TempDir) -> HistoryService {
        HistoryService::new(JsonStore::new(dir.path().join("history.json")), "en", 10)
    }

    #[tokio::test]
    async fn test_append_normalizes_bilingual_input() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);
        let sun = card("The Sun", "Солнце");

        history.append(1, &sun).await.unwrap();
        history.append(1, "The Moon").await.unwrap();

        assert_eq!(history.entries(1).await, vec!["The Sun", "The Moon"]);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("history.json")).unwrap()).unwrap();
        assert_eq!(raw, json!({"1": ["The Sun", "The Moon"]}));
    }

    #[tokio::test]
    async fn test_store_keeps_everything_render_shows_last_ten() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);
        let deck = Deck::new(vec![card("The Sun", "Солнце")], "en").unwrap();

        for i in 0..15 {
            history.append(9, format!("Card {}", i)).await.unwrap();
        }

        assert_eq!(history.entries(9).await.len(), 15);

        let shown = history.render(9, "en", &deck).await;
        let expected: Vec<String> = (5..15).map(|i| format!("Card {}", i)).collect();
        assert_eq!(shown, expected);
    }

    #[tokio::test]
    async fn test_render_translates_known_cards() {
        let dir = tempfile::tempdir().unwrap();
        let history = service(&dir);
        let deck = Deck::new(vec![card("The Sun", "Солнце"), card("The Moon", "Луна")], "en").unwrap();

        history.append(3, "The Sun").await.unwrap();
        history.append(3, "The Lost Card").await.unwrap();
        history.append(3, "The Moon").await.unwrap();

        assert_eq!(history.render(3, "ru", &deck).await, vec!["Солнце", "The Lost Card", "Луна"]);
        assert_eq!(history.render(3, "en", &deck).await, vec!["The Sun", "The Lost Card", "The Moon"]);
        assert!(history.render(4, "en", &deck).await.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_normalizes_legacy_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            json!({
                "1": ["The Sun", {"en": "The Moon", "ru": "Луна"}],
                "2": [{"ru": "Башня"}, 17]
            })
            .to_string(),
        )
        .unwrap();

        let history = service(&dir);
        assert_eq!(history.cleanup().await.unwrap(), 3);

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({
                "1": ["The Sun", "The Moon"],
                "2": [r#"{"ru":"Башня"}"#, "17"]
            })
        );
    }

    #[tokio::test]
    async fn test_cleanup_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, json!({"1": [{"en": "Death", "ru": "Смерть"}, "Justice"]}).to_string()).unwrap();

        let history = service(&dir);
        history.cleanup().await.unwrap();
        let once = std::fs::read_to_string(&path).unwrap();

        assert_eq!(history.cleanup().await.unwrap(), 0);
        let twice = std::fs::read_to_string(&path).unwrap();

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_users_with_odd_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            json!({
                "1": ["The Sun", {"en": "The Moon"}],
                "2": {"en": "The Star"},
                "3": null
            })
            .to_string(),
        )
        .unwrap();

        let history = service(&dir);
        assert_eq!(history.cleanup().await.unwrap(), 2);

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({
                "1": ["The Sun", "The Moon"],
                "2": ["The Star"],
                "3": []
            })
        );
    }

    #[tokio::test]
    async fn test_append_to_odd_shape_keeps_old_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, json!({"1": ["The Sun"], "2": {"en": "The Star"}}).to_string()).unwrap();

        let history = service(&dir);
        assert_eq!(history.entries(2).await, vec!["The Star"]);

        history.append(2, "The Moon").await.unwrap();

        assert_eq!(history.entries(1).await, vec!["The Sun"]);
        assert_eq!(history.entries(2).await, vec!["The Star", "The Moon"]);
    }
}
