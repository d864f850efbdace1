//! URL mapping entity: the association between a short key and a long URL.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted short-key to URL mapping with click telemetry.
///
/// Storage is authoritative for this record; cached copies are best-effort
/// snapshots. `clicks_count` only ever grows and is updated out-of-band by
/// the click worker, so a snapshot read from cache may lag behind storage.
#[derive(Debug, Clone, Serialize)]
pub struct UrlMapping {
    pub id: i64,
    pub short_key: String,
    pub original_url: String,
    pub clicks_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a mapping from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        short_key: String,
        original_url: String,
        clicks_count: i64,
        last_clicked_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_key,
            original_url,
            clicks_count,
            last_clicked_at,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the mapping has been resolved at least once.
    pub fn has_clicks(&self) -> bool {
        self.clicks_count > 0
    }
}

/// Input data for persisting a new mapping.
///
/// Storage assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub short_key: String,
    pub original_url: String,
}
