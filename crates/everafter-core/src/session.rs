// ── RSVP submission session ──
//
// The explicit session object that owns all submission state: the
// status machine, the rate limiter, the sink client, and the timers.
// Constructed at session start and handed by reference to whatever
// renders it — no ambient globals.
//
// Success here is optimistic: the sink is write-only, so "it probably
// worked" is derived from the write completing locally plus a settle
// delay, never from a server confirmation. Known limitation of the
// boundary, not something to engineer around.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use everafter_delivery::SinkClient;

use crate::error::CoreError;
use crate::model::{ClientContext, RsvpForm, StatusError, SubmissionEnvelope, SubmissionStatus};
use crate::rate_limit::{Decision, RateLimiter};
use crate::scheduler::Scheduler;
use crate::validate;

/// How long each transient status stays visible before decaying back
/// to idle. Defaults match the page behavior the guests see.
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    /// Pause between the write completing and `Success` appearing,
    /// giving the sink time to process the row.
    pub success_settle: Duration,
    /// How long `Success` stays before decaying to `Idle`.
    pub success_visible: Duration,
    /// How long a delivery `Error` stays before decaying to `Idle`.
    pub error_visible: Duration,
    /// How long a rate-limit `Error` stays before decaying to `Idle`.
    pub rate_limit_visible: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            success_settle: Duration::from_millis(1500),
            success_visible: Duration::from_secs(2),
            error_visible: Duration::from_secs(2),
            rate_limit_visible: Duration::from_secs(3),
        }
    }
}

/// The RSVP submission pipeline for one page session.
///
/// Cheaply cloneable via `Arc`. Status is published through a watch
/// channel; transitions are strictly sequential per submission, and a
/// submit while one is in flight is rejected up front.
#[derive(Clone)]
pub struct RsvpSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    sink: SinkClient,
    context: ClientContext,
    timing: SessionTiming,
    status: watch::Sender<SubmissionStatus>,
    limiter: Mutex<RateLimiter>,
    scheduler: Scheduler,
}

impl RsvpSession {
    /// Create a session with the page-default timing.
    pub fn new(sink: SinkClient, context: ClientContext) -> Self {
        Self::with_timing(sink, context, SessionTiming::default())
    }

    pub fn with_timing(sink: SinkClient, context: ClientContext, timing: SessionTiming) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            inner: Arc::new(SessionInner {
                sink,
                context,
                timing,
                status,
                limiter: Mutex::new(RateLimiter::new()),
                scheduler: Scheduler::new(),
            }),
        }
    }

    /// Subscribe to status changes.
    pub fn status(&self) -> watch::Receiver<SubmissionStatus> {
        self.inner.status.subscribe()
    }

    /// The status right now.
    pub fn current_status(&self) -> SubmissionStatus {
        *self.inner.status.borrow()
    }

    /// Submit an RSVP.
    ///
    /// Runs validation, the rate limiter, and at most one delivery
    /// attempt, driving the status machine
    /// `idle → submitting → success|error → idle`. Field-level
    /// validation failures return immediately without touching the
    /// status; every other error path decays back to `Idle` on a
    /// timer, so retry is always possible.
    pub async fn submit(&self, form: &RsvpForm) -> Result<(), CoreError> {
        // The UI disables its trigger while submitting; the session
        // still refuses overlapping submissions on its own.
        if self.current_status() == SubmissionStatus::Submitting {
            return Err(CoreError::SubmissionInFlight);
        }

        let input = validate::validate(form).map_err(CoreError::Validation)?;

        let now = Utc::now();
        if let Decision::Rejected { retry_after } = self.inner.limiter.lock().await.check(now) {
            warn!(
                retry_after_secs = retry_after.num_seconds(),
                "rate limit exceeded"
            );
            self.set_status(SubmissionStatus::Error(StatusError::RateLimited));
            self.schedule_decay(
                SubmissionStatus::Error(StatusError::RateLimited),
                self.inner.timing.rate_limit_visible,
            )
            .await;
            return Err(CoreError::RateLimited);
        }

        self.set_status(SubmissionStatus::Submitting);
        let envelope = SubmissionEnvelope::capture(&input, &self.inner.context, now);
        debug!(
            people = envelope.people_amount,
            accepted = envelope.is_accepted,
            "submitting RSVP"
        );

        match self.inner.sink.deliver(&envelope).await {
            Ok(()) => {
                // Settle, show success, then decay back to idle. One
                // cancellable timer covers the whole tail.
                let session = self.clone();
                let timing = self.inner.timing;
                self.inner
                    .scheduler
                    .schedule(timing.success_settle, async move {
                        session.set_status(SubmissionStatus::Success);
                        tokio::time::sleep(timing.success_visible).await;
                        session.decay_from(SubmissionStatus::Success);
                    })
                    .await;
                info!("RSVP delivery attempt completed");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "RSVP delivery attempt failed");
                self.set_status(SubmissionStatus::Error(StatusError::Delivery));
                self.schedule_decay(
                    SubmissionStatus::Error(StatusError::Delivery),
                    self.inner.timing.error_visible,
                )
                .await;
                Err(e.into())
            }
        }
    }

    /// Cancel every pending timer and join their tasks. No late
    /// callback fires after this returns; an in-flight delivery is not
    /// cancelled once issued.
    pub async fn shutdown(&self) {
        self.inner.scheduler.shutdown().await;
        debug!("session shut down");
    }

    /// Schedule a decay from `from` back to `Idle` after `delay`.
    async fn schedule_decay(&self, from: SubmissionStatus, delay: Duration) {
        let session = self.clone();
        self.inner
            .scheduler
            .schedule(delay, async move {
                session.decay_from(from);
            })
            .await;
    }

    /// Reset to `Idle` only if the status is still `from` — a newer
    /// submission may already own the status by the time a timer fires.
    fn decay_from(&self, from: SubmissionStatus) {
        self.inner.status.send_if_modified(|status| {
            if *status == from {
                *status = SubmissionStatus::Idle;
                true
            } else {
                false
            }
        });
    }

    fn set_status(&self, status: SubmissionStatus) {
        let _ = self.inner.status.send(status);
    }
}
