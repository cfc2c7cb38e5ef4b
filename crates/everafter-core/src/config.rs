// ── Runtime wedding configuration ──
//
// Describes the event and the sink endpoint. Carries resolved values
// only and never touches disk — everafter-config builds a
// `WeddingConfig` and hands it in.

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;
use url::Url;

use crate::calendar::CalendarEvent;
use crate::countdown::CountdownEngine;

/// Venue display strings, consumed read-only by renderers.
#[derive(Debug, Clone)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub city: String,
}

/// Contact display strings.
#[derive(Debug, Clone)]
pub struct Contact {
    pub phone: String,
    pub line_id: String,
}

/// Configuration for one wedding page.
///
/// `start` is already resolved against the wedding's civil timezone;
/// malformed dates were rejected upstream, at construction time.
#[derive(Debug, Clone)]
pub struct WeddingConfig {
    pub couple: String,
    pub start: DateTime<Tz>,
    pub duration: TimeDelta,
    pub venue: Venue,
    pub contact: Contact,
    pub sink_url: Url,
    pub timeout: std::time::Duration,
}

impl WeddingConfig {
    pub fn end(&self) -> DateTime<Tz> {
        self.start + self.duration
    }

    /// Countdown engine targeting the wedding instant.
    pub fn countdown(&self) -> CountdownEngine {
        CountdownEngine::new(self.start)
    }

    /// Data for the calendar-export collaborator.
    pub fn calendar_event(&self) -> CalendarEvent {
        CalendarEvent {
            name: self.couple.clone(),
            venue: format!("{}, {}", self.venue.name, self.venue.address),
            start: self.start,
            end: self.end(),
        }
    }
}
