//! Core configuration loaded from environment variables.
//!
//! The embedding service loads environment variables (e.g. via dotenv)
//! before calling [`load_from_env`].
//!
//! ## Optional Variables
//!
//! - `KEY_POOL_SIZE` - Number of pre-generated keys kept ready (default: 100)
//! - `DEFAULT_KEY_LENGTH` - Length of generated keys (default: 7, max: 8)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000, min: 100)
//! - `SHUTDOWN_TIMEOUT_SECS` - Drain deadline for the click worker (default: 5)
//! - `DATABASE_URL` - Postgres connection string; omit when using the
//!   in-memory repository
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::application::click_pipeline::DEFAULT_QUEUE_CAPACITY;
use crate::application::key_pool::DEFAULT_POOL_SIZE;
use crate::utils::key_gen::{DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH};

/// Core configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target size of the key reservation pool.
    pub key_pool_size: usize,
    /// Length of generated short keys.
    pub default_key_length: usize,
    /// Capacity of the click job queue.
    pub click_queue_capacity: usize,
    /// How long shutdown waits for the click worker to drain, in seconds.
    pub shutdown_timeout_secs: u64,
    /// Postgres connection string, when the embedding service uses the
    /// bundled repository.
    pub database_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let key_pool_size = env::var("KEY_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POOL_SIZE);

        let default_key_length = env::var("DEFAULT_KEY_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_KEY_LENGTH);

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUEUE_CAPACITY);

        let shutdown_timeout_secs = env::var("SHUTDOWN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let database_url = env::var("DATABASE_URL").ok();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            key_pool_size,
            default_key_length,
            click_queue_capacity,
            shutdown_timeout_secs,
            database_url,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `key_pool_size` is zero
    /// - `default_key_length` is zero or exceeds the key length limit
    /// - `click_queue_capacity` is out of bounds
    /// - `log_format` is not `text` or `json`
    /// - `database_url` is present but not a Postgres URL
    pub fn validate(&self) -> Result<()> {
        if self.key_pool_size == 0 {
            anyhow::bail!("KEY_POOL_SIZE must be at least 1");
        }

        if self.default_key_length == 0 || self.default_key_length > MAX_KEY_LENGTH {
            anyhow::bail!(
                "DEFAULT_KEY_LENGTH must be between 1 and {}, got {}",
                MAX_KEY_LENGTH,
                self.default_key_length
            );
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref database_url) = self.database_url
            && !database_url.starts_with("postgres://")
            && !database_url.starts_with("postgresql://")
        {
            anyhow::bail!(
                "DATABASE_URL must start with 'postgres://' or 'postgresql://', got '{}'",
                database_url
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_pool_size: DEFAULT_POOL_SIZE,
            default_key_length: DEFAULT_KEY_LENGTH,
            click_queue_capacity: DEFAULT_QUEUE_CAPACITY,
            shutdown_timeout_secs: 5,
            database_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
