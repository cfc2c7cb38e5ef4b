// ── Submission rate limiter ──
//
// Sliding fixed-window: the window restarts entirely once 60 seconds
// have elapsed since it opened; it does not slide per event. Advisory,
// client-local protection against impatient double-taps — it resets
// with the session and is trivially bypassed by a reload, which is an
// accepted non-goal (there is no server the client controls).

use chrono::{DateTime, TimeDelta, Utc};

/// Outcome of evaluating one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Rejected { retry_after: TimeDelta },
}

/// Counts attempts whose timestamp falls within
/// `[window_start, window_start + 60s)`; an attempt outside that
/// window resets the window.
#[derive(Debug, Default)]
pub struct RateLimiter {
    window_start: Option<DateTime<Utc>>,
    count: u32,
}

impl RateLimiter {
    pub const WINDOW_SECS: i64 = 60;
    pub const MAX_PER_WINDOW: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate an attempt at `now`.
    ///
    /// Mutates only on an *allowed* attempt — a rejection neither
    /// extends nor resets the window.
    pub fn check(&mut self, now: DateTime<Utc>) -> Decision {
        match self.window_start {
            Some(start) if (now - start).num_seconds() < Self::WINDOW_SECS => {
                if self.count >= Self::MAX_PER_WINDOW {
                    Decision::Rejected {
                        retry_after: TimeDelta::seconds(Self::WINDOW_SECS) - (now - start),
                    }
                } else {
                    self.count += 1;
                    Decision::Allowed
                }
            }
            // First attempt ever, or the previous window has elapsed.
            _ => {
                self.window_start = Some(now);
                self.count = 1;
                Decision::Allowed
            }
        }
    }

    /// Attempts counted against the current window.
    pub fn attempts_in_window(&self) -> u32 {
        self.count
    }
}
