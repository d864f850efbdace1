//! Orchestrating service composing the key pool, cache, click pipeline,
//! and persistence.

use std::sync::Arc;
use std::time::Duration;

use crate::application::click_pipeline::ClickPipeline;
use crate::application::key_pool::KeyPool;
use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::infrastructure::cache::MappingCache;
use crate::utils::url_normalizer::normalize_url;

/// The embedding-facing core of the shortener.
///
/// This is the only component that talks to collaborators: request handlers
/// call [`ShortenerService::shorten`], [`ShortenerService::resolve`], and
/// [`ShortenerService::shutdown`]; everything else (pool bookkeeping, cache
/// publication, click enqueueing) happens behind these calls.
pub struct ShortenerService<R: MappingRepository> {
    repository: Arc<R>,
    key_pool: KeyPool,
    cache: Arc<dyn MappingCache>,
    clicks: ClickPipeline,
}

impl<R: MappingRepository + 'static> ShortenerService<R> {
    /// Composes a service from its collaborators.
    ///
    /// Pre-fills the key pool to its target size and spawns the click
    /// worker, so this must be called from within a tokio runtime.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn MappingCache>,
        key_pool: KeyPool,
        click_queue_capacity: usize,
    ) -> Self {
        key_pool.fill(key_pool.target_size());
        let clicks = ClickPipeline::spawn(repository.clone(), click_queue_capacity);

        Self {
            repository,
            key_pool,
            cache,
            clicks,
        }
    }

    /// Composes a service sized by [`Config`].
    pub fn from_config(
        repository: Arc<R>,
        cache: Arc<dyn MappingCache>,
        config: &crate::config::Config,
    ) -> Self {
        Self::new(
            repository,
            cache,
            KeyPool::new(config.key_pool_size, config.default_key_length),
            config.click_queue_capacity,
        )
    }

    /// Issues a short key: validates `custom` when given, otherwise takes
    /// the next pre-generated key from the pool.
    ///
    /// The pool only guards the unissued-reservation namespace; callers
    /// committing a custom key rely on the repository's duplicate-key
    /// conflict for keys that are already persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidKey`] for malformed custom keys,
    /// [`AppError::KeyCollision`] for custom keys currently reserved.
    pub fn issue_key(&self, custom: Option<&str>) -> Result<String, AppError> {
        match custom {
            Some(key) if !key.is_empty() => {
                self.key_pool.validate_custom_key(key)?;
                Ok(key.to_string())
            }
            _ => Ok(self.key_pool.take_next()),
        }
    }

    /// Shortens a long URL, optionally under a caller-chosen key.
    ///
    /// Normalizes the URL, issues a key, persists the mapping, and
    /// publishes it into the resolution cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for URLs that cannot be normalized,
    /// [`AppError::InvalidKey`] / [`AppError::KeyCollision`] for custom-key
    /// failures (including keys already persisted), and
    /// [`AppError::Persistence`] on backend errors.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_key: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        let normalized_url =
            normalize_url(long_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        let short_key = self.issue_key(custom_key)?;

        let mapping = self
            .repository
            .insert(NewUrlMapping {
                short_key,
                original_url: normalized_url,
            })
            .await?;

        self.record_save(mapping.clone()).await;

        Ok(mapping)
    }

    /// Resolves a short key to its mapping.
    ///
    /// Checks the cache first and falls back to the repository on a miss,
    /// back-filling the cache on success. On every outcome a click job for
    /// the key is enqueued; the update itself happens out-of-band and a
    /// click on a key that turns out not to exist is dropped by the worker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown keys,
    /// [`AppError::Persistence`] on backend errors.
    pub async fn resolve(&self, short_key: &str) -> Result<UrlMapping, AppError> {
        let result = match self.cache.get(short_key).await {
            Some(mapping) => Ok(mapping),
            None => match self.repository.find_by_key(short_key).await? {
                Some(mapping) => {
                    self.cache.put(mapping.clone()).await;
                    Ok(mapping)
                }
                None => Err(AppError::not_found(short_key)),
            },
        };

        self.clicks.enqueue(ClickEvent::now(short_key));

        result
    }

    /// Publishes a freshly persisted mapping into the resolution cache.
    ///
    /// Invoked after every successful write so that the cache always holds
    /// the latest snapshot the core has seen.
    pub async fn record_save(&self, mapping: UrlMapping) {
        self.cache.put(mapping).await;
    }

    /// Drains the click queue and stops the worker, bounded by `timeout`.
    ///
    /// Returns `true` if every enqueued click was applied and the worker
    /// exited; `false` if teardown had to abort the worker. Either way the
    /// call returns within roughly `timeout`.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.clicks.shutdown(timeout).await
    }

    /// Read access to the key pool, mainly for embedders that want to
    /// pre-fill beyond the default or inspect pool pressure.
    pub fn key_pool(&self) -> &KeyPool {
        &self.key_pool
    }
}
