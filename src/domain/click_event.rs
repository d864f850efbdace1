//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

/// An in-memory representation of a click for async processing.
///
/// Created on the resolve path and sent to the background worker via a
/// channel. This decouples the redirect response from the database write,
/// allowing fast redirects without blocking.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub short_key: String,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a click event for `short_key`, stamped with the current time.
    pub fn now(short_key: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            clicked_at: Utc::now(),
        }
    }
}

/// A unit of work for the click worker.
///
/// The queue preserves enqueue order, so `Shutdown` acts as a sentinel: every
/// job enqueued before it is processed before the worker stops.
#[derive(Debug, Clone)]
pub enum ClickJob {
    /// Apply one click update to persistent storage.
    Record(ClickEvent),
    /// No more work follows; drain and stop.
    Shutdown,
}
