use std::sync::Arc;
use std::time::Duration;

use an_core::{KeyValueStore, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};

/// Cache key of the aggregated article list.
pub const ARTICLES_KEY: &str = "ai-news:articles";

/// Number of leading characters of the input used in summary keys.
pub const SUMMARY_KEY_PREFIX_CHARS: usize = 100;

/// Cache key for a summary of `text`.
pub fn summary_key(text: &str) -> String {
    let prefix: String = text.chars().take(SUMMARY_KEY_PREFIX_CHARS).collect();
    format!("summary:{}", prefix)
}

/// What actually lands in the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub data: T,
}

/// TTL-bounded JSON cache over a [`KeyValueStore`].
///
/// Reads never fail: a missing, unparsable or expired entry is simply a miss.
/// Writes are best effort and a failing store leaves the key cold.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl Cache {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self::with_clock(store, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock, ttl }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(Some(value)) => {
                tracing::debug!("Cache hit: {}", key);
                Some(value)
            }
            Ok(None) => {
                tracing::debug!("Cache miss: {}", key);
                None
            }
            Err(e) => {
                tracing::debug!("Cache entry for {} unreadable, treating as miss: {}", key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, data: &T) {
        if let Err(e) = self.try_set(key, data) {
            tracing::warn!("Failed to cache {}: {}", key, e);
        }
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        let entry: CacheEntry<T> = serde_json::from_slice(&raw)?;
        let Some(age_ms) = self.clock.now().timestamp_millis().checked_sub(entry.timestamp) else {
            return Ok(None);
        };
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        if age_ms > ttl_ms {
            return Ok(None);
        }
        Ok(Some(entry.data))
    }

    fn try_set<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let entry = CacheEntry {
            timestamp: self.clock.now().timestamp_millis(),
            data,
        };
        let raw = serde_json::to_vec(&entry)?;
        self.store.set(key, &raw)
    }
}
