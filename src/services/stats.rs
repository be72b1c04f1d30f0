//! Command usage counters
//!
//! Counters only ever go up and nothing in the bot reads them back.

use serde_json::Value;
use tracing::debug;
use crate::storage::JsonStore;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct StatsService {
    store: JsonStore,
}

impl StatsService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Count one more use of a command
    pub async fn increment(&self, command: &str) -> Result<()> {
        let key = command.to_string();
        let count = self.store.update(move |stats| {
            // A value that is not a count starts over
            let count = stats.get(&key).and_then(Value::as_u64).unwrap_or(0) + 1;
            stats.insert(key, Value::from(count));
            count
        }).await?;

        debug!(command = command, count = count, "Command counter incremented");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counters_accumulate_per_command() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonStore = JsonStore::new(dir.path().join("stats.json"));
        let stats = StatsService::new(store.clone());

        stats.increment("daily").await.unwrap();
        stats.increment("daily").await.unwrap();
        stats.increment("shuffle").await.unwrap();

        assert_eq!(store.get("daily").await, Some(Value::from(2)));
        assert_eq!(store.get("shuffle").await, Some(Value::from(1)));
        assert_eq!(store.get("random").await, None);
    }
}
