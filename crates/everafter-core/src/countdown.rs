// ── Countdown engine ──
//
// Converts the fixed wedding instant and "now" into a
// days/hours/minutes/seconds breakdown, recomputed once per second.
// Leaf component: depends on nothing else in the core.

use std::time::Duration;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CoreError;
use crate::model::TimeRemaining;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Resolve a civil wall-clock date-time against a named timezone.
///
/// Nonexistent or ambiguous local times (DST gaps and folds) are a
/// fatal configuration error here, at construction — never at tick
/// time.
pub fn resolve_civil(civil: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, CoreError> {
    match tz.from_local_datetime(&civil) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(..) => Err(CoreError::Config {
            message: format!("target '{civil}' is ambiguous in {tz}"),
        }),
        LocalResult::None => Err(CoreError::Config {
            message: format!("target '{civil}' does not exist in {tz}"),
        }),
    }
}

/// Countdown to a fixed instant on a named civil timeline.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    target: DateTime<Tz>,
}

impl CountdownEngine {
    pub fn new(target: DateTime<Tz>) -> Self {
        Self { target }
    }

    /// Construct from a civil date-time string's parsed form plus the
    /// wedding's timezone. See [`resolve_civil`] for failure modes.
    pub fn from_civil(civil: NaiveDateTime, tz: Tz) -> Result<Self, CoreError> {
        Ok(Self::new(resolve_civil(civil, tz)?))
    }

    pub fn target(&self) -> &DateTime<Tz> {
        &self.target
    }

    /// Time left at `now` — a pure function of `(target, now)`.
    ///
    /// Both instants are viewed on the target's civil timeline before
    /// differencing, so offset anomalies in the viewer's own timezone
    /// never perturb the result. Clamped at zero once the target has
    /// passed; it does not go negative or wrap.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeRemaining {
        let now = now.with_timezone(&self.target.timezone());
        let total = self.target.signed_duration_since(now).num_seconds();
        TimeRemaining::from_total_seconds(total)
    }

    /// Time left right now.
    pub fn remaining(&self) -> TimeRemaining {
        self.remaining_at(Utc::now())
    }

    /// Spawn the once-per-second ticker, publishing through a watch
    /// channel. The initial value is available immediately.
    pub fn spawn_ticker(&self) -> CountdownHandle {
        let (tx, rx) = watch::channel(self.remaining());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(ticker_task(self.clone(), tx, cancel.clone()));
        CountdownHandle { rx, cancel, task }
    }
}

/// Handle to a running countdown ticker. Dropping it without calling
/// [`shutdown`](Self::shutdown) leaves the task running until its
/// channel closes; teardown paths should shut down explicitly.
pub struct CountdownHandle {
    rx: watch::Receiver<TimeRemaining>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Latest published value.
    pub fn current(&self) -> TimeRemaining {
        *self.rx.borrow()
    }

    /// Subscribe to ticks.
    pub fn subscribe(&self) -> watch::Receiver<TimeRemaining> {
        self.rx.clone()
    }

    /// Cancel the ticker and join its task. No update is published
    /// after this returns.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

async fn ticker_task(
    engine: CountdownEngine,
    tx: watch::Sender<TimeRemaining>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    // Skip, don't burst: a backgrounded session catching up re-derives
    // from absolute instants on the next tick anyway.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    interval.tick().await; // initial value was published at spawn

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                // Re-derive from absolute instants every tick; never
                // decrement a cached counter.
                let _ = tx.send(engine.remaining());
            }
        }
    }
    debug!("countdown ticker stopped");
}
