//! JSON file backed key-value store
//!
//! A store is a single JSON object mapping string keys to arbitrary JSON
//! values. Reads never fail: a missing, unreadable or malformed file is an
//! empty store. Values are kept as raw JSON, so one entry of an unexpected
//! shape never hides the others. Writes replace the file atomically and their
//! errors propagate to the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn, error};
use crate::utils::errors::Result;
use crate::utils::logging::log_store_write;

/// File backed store of `String -> JSON value` entries
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Location of the JSON file
    path: PathBuf,
    /// Serializes read-modify-write cycles within the process
    write_lock: Arc<Mutex<()>>,
}

impl JsonStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole mapping
    pub async fn load(&self) -> BTreeMap<String, Value> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Store not readable, using empty state");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str::<BTreeMap<String, Value>>(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Store content is malformed, using empty state");
                BTreeMap::new()
            }
        }
    }

    /// Serialize the full mapping and replace the file with it
    pub async fn save(&self, map: &BTreeMap<String, Value>) -> Result<()> {
        let serialized = serde_json::to_string_pretty(map)?;
        let tmp_path = self.temp_path();

        if let Err(e) = fs::write(&tmp_path, serialized.as_bytes()).await {
            error!(path = %tmp_path.display(), error = %e, "Failed to write store");
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            error!(path = %self.path.display(), error = %e, "Failed to replace store");
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        log_store_write(&self.path.display().to_string(), map.len());
        Ok(())
    }

    /// Read, mutate and write the mapping as one scoped operation
    ///
    /// The mutation's return value is handed back once the write succeeded.
    pub async fn update<F, R>(&self, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut BTreeMap<String, Value>) -> R,
    {
        let _guard = self.write_lock.lock().await;

        let mut map = self.load().await;
        let outcome = mutate(&mut map);
        self.save(&map).await?;

        Ok(outcome)
    }

    /// Look up a single key
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.load().await.remove(key)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir, name: &str) -> JsonStore {
        JsonStore::new(dir.path().join(name))
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "missing.json");

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "broken.json");
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().await.is_empty());

        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "stats.json");

        let mut map = BTreeMap::new();
        map.insert("daily".to_string(), json!(3));
        map.insert("ru".to_string(), json!("Шут"));
        store.save(&map).await.unwrap();

        assert_eq!(store.load().await, map);
        assert!(!dir.path().join("stats.json.tmp").exists());

        // Non-ASCII text is written verbatim
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("Шут"));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nope").join("stats.json"));

        assert!(store.save(&BTreeMap::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_update_returns_mutation_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("counters.json"));
        let bump = |map: &mut BTreeMap<String, Value>| {
            let count = map.get("random").and_then(Value::as_u64).unwrap_or(0) + 1;
            map.insert("random".to_string(), json!(count));
            count
        };

        let first = store.update(bump).await.unwrap();
        let second = store.update(bump).await.unwrap();

        assert_eq!((first, second), (1, 2));
        assert_eq!(store.get("random").await, Some(json!(2)));
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("counters.json"));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update(|map| {
                        let count = map.get("daily").and_then(Value::as_u64).unwrap_or(0);
                        map.insert("daily".to_string(), json!(count + 1));
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.get("daily").await, Some(json!(20)));
    }

    #[tokio::test]
    async fn test_odd_values_survive_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, "user_lang.json");
        std::fs::write(store.path(), json!({"1": "ru", "2": null, "3": [1, 2]}).to_string()).unwrap();

        assert_eq!(store.get("1").await, Some(json!("ru")));

        store
            .update(|map| map.insert("4".to_string(), json!("en")))
            .await
            .unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw, json!({"1": "ru", "2": null, "3": [1, 2], "4": "en"}));
    }
}
