//! Calendar events as delivered by the event-list collaborator, and their conversion
//! into busy intervals.
//!
//! The JSON shape follows the Google Calendar `events.list` resource: each event has an
//! optional `status`, `transparency`, and `start`/`end` objects carrying either a
//! `dateTime` (timed events) or a `date` (all-day events).

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::Interval;

/// One end of an event: a timed instant or an all-day date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// RFC 3339 timestamp, e.g. `2025-08-11T10:00:00+09:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// `YYYY-MM-DD` for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// `confirmed`, `tentative` or `cancelled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `opaque` (blocks time) or `transparent` (marked as free).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventPayload {
    List(Vec<CalendarEvent>),
    Page {
        #[serde(default)]
        items: Vec<CalendarEvent>,
    },
}

/// Parse either a bare JSON array of events or an `events.list` page (`{"items": [...]}`).
pub fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>> {
    let payload: EventPayload = serde_json::from_str(json)?;
    Ok(match payload {
        EventPayload::List(events) => events,
        EventPayload::Page { items } => items,
    })
}

impl CalendarEvent {
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref().is_some_and(|s| {
            s.eq_ignore_ascii_case("cancelled") || s.eq_ignore_ascii_case("canceled")
        })
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("transparent"))
    }

    /// The time covered by this event in `tz`.
    ///
    /// Timed events are converted into `tz`. All-day events span local midnight of the
    /// start date to local midnight of the (exclusive) end date. Returns `None` when
    /// either end is missing or unparseable, or when the two ends disagree in kind.
    pub fn span(&self, tz: Tz) -> Option<Interval> {
        let (start, end) = (self.start.as_ref()?, self.end.as_ref()?);

        if let (Some(s), Some(e)) = (start.date_time.as_deref(), end.date_time.as_deref()) {
            let s = DateTime::parse_from_rfc3339(s).ok()?;
            let e = DateTime::parse_from_rfc3339(e).ok()?;
            return Some(Interval::new(s.with_timezone(&tz), e.with_timezone(&tz)));
        }

        if let (Some(s), Some(e)) = (start.date.as_deref(), end.date.as_deref()) {
            let s = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            let e = NaiveDate::parse_from_str(e, "%Y-%m-%d").ok()?;
            return Some(Interval::new(local_midnight(s, tz)?, local_midnight(e, tz)?));
        }

        None
    }
}

/// Start of `date` in `tz`.
///
/// When midnight falls in a DST gap the day starts at the first local time that
/// exists, e.g. 01:00 where clocks jump from 00:00 to 01:00.
fn local_midnight(date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    (0..=MAX_GAP_STEPS).find_map(|step| {
        tz.from_local_datetime(&(midnight + Duration::minutes(step * 15)))
            .earliest()
    })
}

/// Quarter hours to probe past a gap; no zone skips more than two hours.
const MAX_GAP_STEPS: i64 = 8;

/// Convert events into busy intervals in `tz`.
///
/// Cancelled and transparent events are skipped, as are events without a usable span
/// and events whose end is not after their start.
pub fn events_to_intervals(events: &[CalendarEvent], tz: Tz) -> Vec<Interval> {
    let mut busy = Vec::with_capacity(events.len());
    for event in events {
        let id = event.id.as_deref().unwrap_or("-");
        if event.is_cancelled() {
            tracing::debug!(event = id, "skipping cancelled event");
            continue;
        }
        if event.is_transparent() {
            tracing::debug!(event = id, "skipping transparent event");
            continue;
        }
        let Some(span) = event.span(tz) else {
            tracing::debug!(event = id, "skipping event without a usable start/end");
            continue;
        };
        if span.is_empty() {
            tracing::debug!(event = id, "skipping zero-length event");
            continue;
        }
        busy.push(span);
    }
    busy
}
