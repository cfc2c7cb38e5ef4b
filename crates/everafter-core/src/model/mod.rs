// ── Domain model ──
//
// Plain data types shared across the countdown engine and the
// submission pipeline. Validation lives in `crate::validate`.

mod envelope;
mod input;
mod status;
mod time_remaining;

pub use envelope::{ClientContext, SubmissionEnvelope};
pub use input::{Attendance, RsvpForm, RsvpInput};
pub use status::{StatusError, SubmissionStatus};
pub use time_remaining::TimeRemaining;
