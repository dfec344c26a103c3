//! Process-wide query cache sitting between the view services and the API
//! access layer.
//!
//! Entries are keyed by resource + serialized parameters and expire after a
//! TTL (the Rust-side stand-in for the widgets' periodic refetch intervals).
//! At most one fetch per key is in flight at a time; concurrent subscribers
//! of the same key wait for that fetch and then read the stored value, so a
//! stale response can never overwrite a newer one for the same key. Only
//! successful responses are cached. The cache lives for the process lifetime
//! and is dropped with it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::api::{ApiError, ApiResult, QueryPairs};

struct Entry {
    value: serde_json::Value,
    stored_at: Instant,
}

pub struct QueryCache {
    default_ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
    /// Per-key gates serializing fetches; shared by simultaneous subscribers.
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl QueryCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            default_ttl,
            entries: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Builds the canonical cache key for a resource and its parameters.
    pub fn key(resource: &str, params: &QueryPairs) -> String {
        if params.is_empty() {
            resource.to_string()
        } else {
            format!("{resource}?{}", params.encode())
        }
    }

    /// Returns the cached value for `key` if fresh, otherwise runs `fetch`
    /// and stores its result. Concurrent callers of the same key share one
    /// fetch; the losers read the winner's stored value.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let ttl = ttl.unwrap_or(self.default_ttl);

        if let Some(hit) = self.lookup(key, ttl).await {
            return Ok(hit);
        }

        let gate = self.gate(key).await;
        let _guard = gate.lock().await;

        // Another subscriber may have completed the fetch while we waited.
        if let Some(hit) = self.lookup(key, ttl).await {
            return Ok(hit);
        }

        let value = fetch().await?;
        let stored =
            serde_json::to_value(&value).map_err(|err| ApiError::Decode(err.to_string()))?;
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value: stored,
                stored_at: Instant::now(),
            },
        );
        Ok(value)
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() >= ttl {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    async fn gate(&self, key: &str) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight.entry(key.to_string()).or_default().clone()
    }

    /// Drops one cached entry.
    pub async fn invalidate(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }

    /// Drops every cached entry belonging to a resource, regardless of its
    /// query parameters.
    pub async fn invalidate_resource(&self, resource: &str) {
        let prefix = format!("{resource}?");
        self.entries
            .lock()
            .await
            .retain(|key, _| key != resource && !key.starts_with(&prefix));
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
        self.inflight.lock().await.clear();
    }
}
