//! Tracing subscriber setup for embedding services.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `level` is used when `RUST_LOG` is unset; `json` switches the formatter
/// to structured output. Call once at process startup; a second call is a
/// logged no-op so tests can initialize freely.
pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let result = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
