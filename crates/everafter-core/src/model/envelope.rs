use chrono::{DateTime, Utc};
use serde::Serialize;

use super::input::RsvpInput;

/// Browser-side context attached to every submission: who is
/// submitting (user agent) and where they came from (referrer).
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub user_agent: String,
    pub referrer: Option<String>,
}

impl ClientContext {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            referrer: None,
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }
}

/// The wire payload for one delivery attempt. Constructed fresh per
/// attempt and not retained — the system owns no persistent storage.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionEnvelope {
    pub first_name: String,
    pub last_name: String,
    pub people_amount: u8,
    pub is_accepted: bool,
    /// Capture time, ISO-8601.
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub referrer: String,
}

impl SubmissionEnvelope {
    /// Build the payload from a validated input plus page context.
    /// A missing referrer is recorded as `"direct"`.
    pub fn capture(input: &RsvpInput, context: &ClientContext, at: DateTime<Utc>) -> Self {
        Self {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            people_amount: input.people_amount,
            is_accepted: input.attendance.is_accepted(),
            timestamp: at,
            user_agent: context.user_agent.clone(),
            referrer: context
                .referrer
                .clone()
                .unwrap_or_else(|| "direct".to_owned()),
        }
    }
}
