//! Repository trait for URL mapping persistence.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence interface consumed by the shortener core.
///
/// Storage behind this trait is the source of truth for mappings; the
/// resolution cache and key pool only accelerate or pre-validate access to
/// it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-process map for
///   tests and embedders without a database
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping, assigning id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyCollision`] if the short key is already
    /// persisted, [`AppError::Persistence`] on backend errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on backend errors.
    async fn find_by_key(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Increments the click count and sets the last-clicked timestamp.
    ///
    /// Invoked only by the background click worker; failures here are
    /// logged by the worker and never surfaced to a request path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches `short_key`,
    /// [`AppError::Persistence`] on backend errors.
    async fn apply_click(&self, short_key: &str, clicked_at: DateTime<Utc>)
    -> Result<(), AppError>;
}
