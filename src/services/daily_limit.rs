//! Daily card rate limiter
//!
//! A user may draw the daily card once per calendar date. The date comes
//! from the local wall clock without any timezone configuration.

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::debug;
use crate::storage::JsonStore;
use crate::utils::errors::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Per-user, per-day gate backed by the daily marker store
#[derive(Clone)]
pub struct DailyLimiter {
    store: JsonStore,
}

impl DailyLimiter {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Claim today's draw for the user
    ///
    /// Returns `true` and records `today` when the user has no marker or a
    /// marker for another date. Returns `false` without writing otherwise.
    pub async fn try_consume_daily(&self, user_id: i64, today: NaiveDate) -> Result<bool> {
        let key = user_id.to_string();
        let today = today.format(DATE_FORMAT).to_string();

        // Cheap read first so a refused check never touches the file
        let allowed = self.store.get(&key).await.as_ref().and_then(Value::as_str) != Some(today.as_str());
        if !allowed {
            debug!(user_id = user_id, date = %today, "Daily card already used");
            return Ok(false);
        }

        // Check and claim again under the store lock
        let claimed = self.store.update(move |markers| {
            if markers.get(&key).and_then(Value::as_str) == Some(today.as_str()) {
                false
            } else {
                markers.insert(key, Value::String(today));
                true
            }
        }).await?;

        debug!(user_id = user_id, claimed = claimed, "Daily card check");
        Ok(claimed)
    }

    #[cfg(test)]
    async fn last_use(&self, user_id: i64) -> Option<NaiveDate> {
        let stored = self.store.get(&user_id.to_string()).await?;
        NaiveDate::parse_from_str(stored.as_str()?, DATE_FORMAT).ok()
    }
}
