//! Handle for the asynchronous click-tracking pipeline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::click_event::{ClickEvent, ClickJob};
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::MappingRepository;

/// Default capacity of the click job queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Multi-producer handle to the single click worker.
///
/// Enqueueing is non-blocking: the redirect path hands a job to the queue
/// and returns immediately, the worker applies the write out-of-band. The
/// queue buffers click bursts against the serialized writer, so a storage
/// backend slower than request arrival degrades telemetry, not redirects.
///
/// [`ClickPipeline::shutdown`] implements the drain protocol: a sentinel
/// job marks the end of the stream, every job enqueued before it is applied
/// before the worker exits, and a timeout bounds how long teardown waits.
pub struct ClickPipeline {
    tx: mpsc::Sender<ClickJob>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl ClickPipeline {
    /// Spawns the worker task and returns the producer handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(repository: Arc<R>, queue_capacity: usize) -> Self
    where
        R: MappingRepository + 'static,
    {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        let worker = tokio::spawn(run_click_worker(rx, repository));

        Self {
            tx,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Enqueues one click update without waiting.
    ///
    /// Click telemetry is best-effort: if the queue is full or the worker
    /// has stopped, the event is logged and dropped rather than delaying
    /// the caller.
    pub fn enqueue(&self, event: ClickEvent) {
        if let Err(e) = self.tx.try_send(ClickJob::Record(event)) {
            tracing::warn!("dropping click event: {e}");
        }
    }

    /// Drains the queue and stops the worker.
    ///
    /// Sends the shutdown sentinel, then waits up to `timeout` for the
    /// worker to process everything enqueued before it and exit. On
    /// timeout the worker task is aborted and `false` is returned; control
    /// always comes back to the caller.
    ///
    /// Safe to call when the queue is already empty, and idempotent: only
    /// the call that takes the worker handle observes the drain outcome;
    /// any call after or racing it finds the slot already empty and
    /// returns `true` immediately without waiting on the drain.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        let handle = self
            .worker
            .lock()
            .expect("click pipeline mutex poisoned")
            .take();

        let Some(mut handle) = handle else {
            // Already shut down.
            return true;
        };

        if self.tx.send(ClickJob::Shutdown).await.is_err() {
            // Worker already gone; still await its handle below.
            tracing::debug!("click worker stopped before shutdown sentinel");
        }

        match tokio::time::timeout(timeout, &mut handle).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!("click worker task failed during shutdown: {e}");
                false
            }
            Err(_) => {
                tracing::warn!("click worker did not drain within {timeout:?}, aborting");
                // Jobs still queued at this point are dropped; click
                // telemetry is best-effort even at teardown.
                handle.abort();
                false
            }
        }
    }
}
