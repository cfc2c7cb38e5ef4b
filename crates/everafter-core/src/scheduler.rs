// ── Cancellable timer scheduler ──
//
// Replaces bare fire-and-forget timers: every scheduled callback races
// a shared cancellation token, so after `shutdown` no late callback
// can act on a torn-down session.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// One-shot timer scheduler whose callbacks are all cancellable.
#[derive(Debug, Default)]
pub struct Scheduler {
    cancel: CancellationToken,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` after `delay`, unless the scheduler shuts down first.
    /// Cancellation also interrupts `f` at its await points.
    pub async fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = async {
                    tokio::time::sleep(delay).await;
                    f.await;
                } => {}
            }
        });

        let mut handles = self.handles.lock().await;
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Cancel all pending timers and join their tasks.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        for handle in self.handles.lock().await.drain(..) {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn callback_fires_after_delay() {
        let scheduler = Scheduler::new();
        let fired = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&fired);
        scheduler
            .schedule(Duration::from_secs(2), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_callbacks() {
        let scheduler = Scheduler::new();
        let fired = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&fired);
        scheduler
            .schedule(Duration::from_secs(10), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        scheduler.shutdown().await;
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0, "late callback fired");
    }
}
