/// What went wrong, as far as the guest is concerned.
///
/// Two kinds only: the advisory rate limiter said no, or the local
/// write failed. The sink never reports anything back, so there is no
/// "server rejected" variant — none can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// Too many attempts inside the current window.
    RateLimited,
    /// The delivery attempt failed locally (network unreachable etc.).
    Delivery,
}

impl StatusError {
    /// User-facing message for this error.
    pub fn message(self) -> &'static str {
        match self {
            Self::RateLimited => {
                "Too many submission attempts. Please wait a minute before trying again."
            }
            Self::Delivery => "There was an error submitting your RSVP. Please try again.",
        }
    }
}

/// Pipeline status. Exactly one value at a time, owned by the session
/// and published through a watch channel.
///
/// `Success` and `Error` are transient: both decay back to `Idle` on a
/// timer, so no state is terminal and every error path allows retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(StatusError),
}

impl SubmissionStatus {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}
