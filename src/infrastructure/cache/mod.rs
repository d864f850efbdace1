//! Caching layer for fast redirect lookups.
//!
//! Provides a [`MappingCache`] trait with two implementations:
//! - [`MemoryCache`] - in-process map with no eviction
//! - [`NullCache`] - no-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::MappingCache;
