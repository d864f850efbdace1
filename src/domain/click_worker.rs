//! Background worker applying click updates to persistent storage.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickJob;
use crate::domain::repositories::MappingRepository;

/// Consumes click jobs until the shutdown sentinel is received.
///
/// Must run on exactly one task: ordering and drain accounting assume a
/// single consumer. Jobs are processed in enqueue order; a failing job is
/// logged and skipped so that one transient persistence error never stalls
/// the queue. Click telemetry is best-effort by design — failed updates are
/// dropped, not retried.
pub async fn run_click_worker<R>(mut rx: mpsc::Receiver<ClickJob>, repository: Arc<R>)
where
    R: MappingRepository + ?Sized,
{
    tracing::info!("click worker started");

    while let Some(job) = rx.recv().await {
        match job {
            ClickJob::Record(event) => {
                if let Err(e) = repository
                    .apply_click(&event.short_key, event.clicked_at)
                    .await
                {
                    tracing::warn!(short_key = %event.short_key, "failed to record click: {e}");
                }
            }
            ClickJob::Shutdown => break,
        }
    }

    tracing::info!("click worker stopped");
}
