//! Error taxonomy for the shortener core.
//!
//! Synchronous failures (key validation, lookups, persistence) are surfaced
//! to the caller through [`AppError`]; the embedding layer maps them to
//! user-facing responses. Failures inside the click worker are logged and
//! dropped there and never reach a request path.

use thiserror::Error;

/// Errors surfaced by the shortener core to its callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A caller-supplied short key is malformed (length or character set).
    #[error("invalid short key: {reason}")]
    InvalidKey { reason: String },

    /// A short key is already reserved or already persisted.
    #[error("short key '{key}' is already taken")]
    KeyCollision { key: String },

    /// No mapping exists for the requested short key.
    #[error("short link '{key}' not found")]
    NotFound { key: String },

    /// The long URL could not be normalized into an http(s) URL.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// The persistence backend failed. Transient by assumption; callers
    /// decide whether to retry.
    #[error("persistence error: {message}")]
    Persistence { message: String },
}

impl AppError {
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    pub fn key_collision(key: impl Into<String>) -> Self {
        Self::KeyCollision { key: key.into() }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}

/// Maps a sqlx error to the core taxonomy.
///
/// Unique-constraint violations become [`AppError::KeyCollision`] for the
/// given key; everything else is reported as a persistence error.
pub fn map_sqlx_error(e: sqlx::Error, key: &str) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::key_collision(key);
    }

    AppError::persistence(e.to_string())
}
