//! No-op cache implementation for testing or disabled caching.

use async_trait::async_trait;
use tracing::debug;

use super::service::MappingCache;
use crate::domain::entities::UrlMapping;

/// A cache implementation that does nothing.
///
/// Every lookup misses, so all resolves fall through to persistent storage.
/// Useful for testing cache-miss paths and for deployments where the
/// in-process cache is explicitly disabled.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingCache for NullCache {
    async fn get(&self, _short_key: &str) -> Option<UrlMapping> {
        None
    }

    async fn put(&self, _mapping: UrlMapping) {}

    async fn invalidate(&self, _short_key: &str) {}

    async fn clear(&self) {}
}
