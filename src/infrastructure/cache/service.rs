//! Resolution cache trait.

use async_trait::async_trait;

use crate::domain::entities::UrlMapping;

/// Trait for caching resolved short-key mappings.
///
/// The cache is a best-effort accelerator for the redirect path and is
/// never authoritative: a miss always falls through to persistent storage,
/// so implementations may evict or lose entries at any time without
/// correctness loss. Because every successful write and resolve overwrites
/// its entry, no invalidation protocol beyond [`MappingCache::invalidate`]
/// is needed.
///
/// Implementations must be thread-safe. Concurrent operations on distinct
/// keys must not interfere; a read racing a write on the same key may see
/// either the old or the new snapshot, never a partial one.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process map, no eviction
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait MappingCache: Send + Sync {
    /// Returns the cached snapshot for a short key, if any.
    async fn get(&self, short_key: &str) -> Option<UrlMapping>;

    /// Stores a mapping snapshot, unconditionally replacing any previous
    /// entry for the same short key.
    async fn put(&self, mapping: UrlMapping);

    /// Removes a single entry. A no-op if the key is not cached.
    async fn invalidate(&self, short_key: &str);

    /// Drops every entry.
    async fn clear(&self);
}
