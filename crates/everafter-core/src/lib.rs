// everafter-core: countdown engine and RSVP submission pipeline for a
// single-page wedding-invitation site. Consumers render; this crate
// owns every piece of state transition and temporal logic.

pub mod calendar;
pub mod config;
pub mod countdown;
pub mod error;
pub mod model;
pub mod rate_limit;
pub mod scheduler;
pub mod session;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use calendar::CalendarEvent;
pub use config::{Contact, Venue, WeddingConfig};
pub use countdown::{CountdownEngine, CountdownHandle};
pub use error::CoreError;
pub use rate_limit::{Decision, RateLimiter};
pub use session::{RsvpSession, SessionTiming};
pub use validate::FieldError;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Attendance, ClientContext, RsvpForm, RsvpInput, StatusError, SubmissionEnvelope,
    SubmissionStatus, TimeRemaining,
};
