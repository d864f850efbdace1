//! In-memory implementation of the mapping repository.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// A process-local mapping store.
///
/// Implements the same contract as the PostgreSQL repository, including the
/// duplicate-key conflict on insert, so integration tests and embedders
/// without a database exercise identical semantics.
pub struct InMemoryMappingRepository {
    mappings: RwLock<HashMap<String, UrlMapping>>,
    next_id: AtomicI64,
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMappingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            mappings: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Returns the number of stored mappings.
    pub async fn len(&self) -> usize {
        self.mappings.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.mappings.read().await.is_empty()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.write().await;

        if mappings.contains_key(&new_mapping.short_key) {
            return Err(AppError::key_collision(new_mapping.short_key));
        }

        let now = Utc::now();
        let mapping = UrlMapping::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_mapping.short_key.clone(),
            new_mapping.original_url,
            0,
            None,
            now,
            now,
        );

        mappings.insert(new_mapping.short_key, mapping.clone());
        Ok(mapping)
    }

    async fn find_by_key(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.mappings.read().await.get(short_key).cloned())
    }

    async fn apply_click(
        &self,
        short_key: &str,
        clicked_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut mappings = self.mappings.write().await;

        let mapping = mappings
            .get_mut(short_key)
            .ok_or_else(|| AppError::not_found(short_key))?;

        mapping.clicks_count += 1;
        mapping.last_clicked_at = Some(clicked_at);
        mapping.updated_at = clicked_at;

        Ok(())
    }
}
