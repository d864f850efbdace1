//! # Trimmly Core
//!
//! The embeddable core of a URL-shortening service: collision-free short
//! key issuance, low-latency resolution, and asynchronous click tracking.
//! The HTTP surface (routing, templating, authentication) is left to the
//! embedding application, which drives the core through
//! [`ShortenerService`](application::services::ShortenerService).
//!
//! ## Architecture
//!
//! Three components compose around one synchronous read path and one
//! asynchronous side channel:
//!
//! - **Key pool** ([`application::key_pool`]) - a standing supply of
//!   pre-generated, mutually-unique short keys, plus custom-key validation
//! - **Resolution cache** ([`infrastructure::cache`]) - an in-process map
//!   consulted before storage on every resolve, so the hot redirect path
//!   avoids a database round trip
//! - **Click pipeline** ([`application::click_pipeline`]) - a bounded queue
//!   and a single background worker applying click telemetry out-of-band,
//!   with a sentinel-based drain on shutdown
//!
//! Persistent storage sits behind the
//! [`MappingRepository`](domain::repositories::MappingRepository) trait;
//! PostgreSQL and in-memory implementations are provided.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use trimmly_core::prelude::*;
//! use trimmly_core::application::key_pool::KeyPool;
//! use trimmly_core::infrastructure::cache::MemoryCache;
//! use trimmly_core::infrastructure::persistence::InMemoryMappingRepository;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), AppError> {
//! let repository = Arc::new(InMemoryMappingRepository::new());
//! let service = ShortenerService::new(
//!     repository,
//!     Arc::new(MemoryCache::new()),
//!     KeyPool::new(100, 7),
//!     10_000,
//! );
//!
//! let mapping = service.shorten("example.com/some/long/path", None).await?;
//! let resolved = service.resolve(&mapping.short_key).await?;
//! assert_eq!(resolved.original_url, "https://example.com/some/long/path");
//!
//! service.shutdown(Duration::from_secs(5)).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Runtime knobs (pool size, key length, queue capacity, shutdown timeout)
//! load from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for embedding
/// applications and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::config::Config;
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
}
