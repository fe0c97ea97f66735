use std::num::NonZeroUsize;

use lru::LruCache;
use serde_json::Value;
use tokio::sync::RwLock;

/// Number of distinct results kept before the least recently used is evicted.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Response cache keyed by query text and variables.
///
/// Holds the `data` of successful responses only.
pub struct InMemoryCache {
    entries: RwLock<LruCache<CacheKey, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    query: String,
    variables: String,
}

impl CacheKey {
    pub(crate) fn new(query: &str, variables: Option<&Value>) -> Self {
        Self {
            query: query.trim().to_owned(),
            variables: variables.map(Value::to_string).unwrap_or_default(),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl InMemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub(crate) async fn read(&self, key: &CacheKey) -> Option<Value> {
        // a hit refreshes recency, so it needs the write side
        self.entries.write().await.get(key).cloned()
    }

    pub(crate) async fn write(&self, key: CacheKey, data: Value) {
        self.entries.write().await.put(key, data);
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every cached result.
    pub async fn reset(&self) {
        self.entries.write().await.clear();
    }
}
