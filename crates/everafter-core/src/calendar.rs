// ── Calendar export ──
//
// Pure formatting: a downloadable calendar-file artifact and a
// pre-filled external calendar link. The core hands data in and never
// depends on the output.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use url::Url;

/// One exportable event: `(name, venue, start, end)`.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub name: String,
    pub venue: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl CalendarEvent {
    const DT_LOCAL: &'static str = "%Y%m%dT%H%M%S";
    const DT_UTC: &'static str = "%Y%m%dT%H%M%SZ";

    /// RFC 5545 calendar-file artifact, CRLF line endings. Times are
    /// rendered on the event's own civil timeline with a `TZID`.
    pub fn to_ics(&self) -> String {
        let tzid = self.start.timezone().name();
        let stamp = self.start.with_timezone(&Utc).format(Self::DT_UTC);
        let lines = [
            "BEGIN:VCALENDAR".to_owned(),
            "VERSION:2.0".to_owned(),
            "PRODID:-//everafter//EN".to_owned(),
            "BEGIN:VEVENT".to_owned(),
            format!("UID:{stamp}@everafter"),
            format!("DTSTAMP:{stamp}"),
            format!("DTSTART;TZID={tzid}:{}", self.start.format(Self::DT_LOCAL)),
            format!("DTEND;TZID={tzid}:{}", self.end.format(Self::DT_LOCAL)),
            format!("SUMMARY:{}", escape_text(&self.name)),
            format!("LOCATION:{}", escape_text(&self.venue)),
            "END:VEVENT".to_owned(),
            "END:VCALENDAR".to_owned(),
        ];
        let mut out = lines.join("\r\n");
        out.push_str("\r\n");
        out
    }

    /// Pre-filled Google Calendar template link covering the same
    /// range (UTC instants plus the display timezone).
    pub fn google_calendar_url(&self) -> Url {
        let dates = format!(
            "{}/{}",
            self.start.with_timezone(&Utc).format(Self::DT_UTC),
            self.end.with_timezone(&Utc).format(Self::DT_UTC),
        );

        let mut url = Url::parse("https://calendar.google.com/calendar/render")
            .expect("static base URL");
        url.query_pairs_mut()
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &self.name)
            .append_pair("dates", &dates)
            .append_pair("location", &self.venue)
            .append_pair("ctz", self.start.timezone().name());
        url
    }
}

/// RFC 5545 TEXT escaping.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> CalendarEvent {
        let tz = chrono_tz::Asia::Bangkok;
        let start = tz.with_ymd_and_hms(2025, 11, 22, 18, 0, 0).unwrap();
        CalendarEvent {
            name: "Annop & Sornsawan".into(),
            venue: "The Park Nine Hotel, Lat Krabang".into(),
            start,
            end: start + chrono::TimeDelta::hours(4),
        }
    }

    #[test]
    fn ics_renders_civil_times_with_tzid() {
        let ics = event().to_ics();
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("DTSTART;TZID=Asia/Bangkok:20251122T180000\r\n"));
        assert!(ics.contains("DTEND;TZID=Asia/Bangkok:20251122T220000\r\n"));
        assert!(ics.contains("SUMMARY:Annop & Sornsawan\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn ics_escapes_reserved_text_characters() {
        let ics = event().to_ics();
        // The venue contains a comma, which TEXT values must escape.
        assert!(ics.contains("LOCATION:The Park Nine Hotel\\, Lat Krabang\r\n"));
    }

    #[test]
    fn google_link_encodes_the_same_range_in_utc() {
        let url = event().google_calendar_url();
        assert_eq!(url.host_str(), Some("calendar.google.com"));

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["action"], "TEMPLATE");
        // 18:00–22:00 Bangkok == 11:00–15:00 UTC.
        assert_eq!(pairs["dates"], "20251122T110000Z/20251122T150000Z");
        assert_eq!(pairs["ctz"], "Asia/Bangkok");
        assert_eq!(pairs["text"], "Annop & Sornsawan");
    }
}
