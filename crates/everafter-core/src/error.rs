// ── Core error types ──
//
// User-facing errors from everafter-core. Consumers never see reqwest
// types directly — the `From<everafter_delivery::Error>` impl folds
// transport failures into the one delivery variant that can exist for
// a write-only sink.

use thiserror::Error;

use crate::validate::FieldError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed static configuration (bad target date, bad timezone).
    /// Detected at construction, never at tick time.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// One or more fields failed validation. The pipeline status was
    /// not touched.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// A submission is already in flight; the new one was ignored.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The advisory rate limiter rejected this attempt.
    #[error("Too many submission attempts -- wait a minute before trying again")]
    RateLimited,

    /// The delivery attempt failed locally. This is the only delivery
    /// failure that exists: the sink never reports back.
    #[error("Delivery failed: {message}")]
    DeliveryFailed { message: String },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<everafter_delivery::Error> for CoreError {
    fn from(err: everafter_delivery::Error) -> Self {
        Self::DeliveryFailed {
            message: err.to_string(),
        }
    }
}
