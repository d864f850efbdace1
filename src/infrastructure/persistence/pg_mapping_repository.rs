//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_error};

/// Database row shape for `url_mappings`. Kept private so the domain entity
/// stays free of sqlx derives.
#[derive(sqlx::FromRow)]
struct UrlMappingRow {
    id: i64,
    short_key: String,
    original_url: String,
    clicks_count: i64,
    last_clicked_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(
            row.id,
            row.short_key,
            row.original_url,
            row.clicks_count,
            row.last_clicked_at,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uses prepared statements for SQL injection protection. The schema lives
/// in `migrations/`; the `short_key` column carries a unique constraint,
/// which is what turns concurrent duplicate inserts into
/// [`AppError::KeyCollision`] instead of silent overwrites.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mappings (short_key, original_url)
            VALUES ($1, $2)
            RETURNING id, short_key, original_url, clicks_count,
                      last_clicked_at, created_at, updated_at
            "#,
        )
        .bind(&new_mapping.short_key)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, &new_mapping.short_key))?;

        Ok(row.into())
    }

    async fn find_by_key(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT id, short_key, original_url, clicks_count,
                   last_clicked_at, created_at, updated_at
            FROM url_mappings
            WHERE short_key = $1
            "#,
        )
        .bind(short_key)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, short_key))?;

        Ok(row.map(UrlMapping::from))
    }

    async fn apply_click(
        &self,
        short_key: &str,
        clicked_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE url_mappings
            SET clicks_count = clicks_count + 1,
                last_clicked_at = $2,
                updated_at = now()
            WHERE short_key = $1
            "#,
        )
        .bind(short_key)
        .bind(clicked_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, short_key))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(short_key));
        }

        Ok(())
    }
}
