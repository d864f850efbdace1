//! In-process resolution cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::service::MappingCache;
use crate::domain::entities::UrlMapping;

/// A write-through in-process cache of resolved mappings.
///
/// Backed by a `RwLock<HashMap>`: entries are replaced atomically, reads on
/// the hot redirect path take the lock only briefly and never perform I/O.
/// There is no eviction and no TTL — the map grows with the number of
/// distinct mappings seen over the process lifetime, which is acceptable as
/// long as mapping volume stays bounded by available memory.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, UrlMapping>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl MappingCache for MemoryCache {
    async fn get(&self, short_key: &str) -> Option<UrlMapping> {
        self.entries.read().await.get(short_key).cloned()
    }

    async fn put(&self, mapping: UrlMapping) {
        self.entries
            .write()
            .await
            .insert(mapping.short_key.clone(), mapping);
    }

    async fn invalidate(&self, short_key: &str) {
        self.entries.write().await.remove(short_key);
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
