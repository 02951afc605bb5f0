//! Per-day availability over a date range.
//!
//! Walks every weekday in an inclusive date range, builds that day's work window in the
//! configured zone, and derives its free slots from one shared list of busy intervals.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::clock::ClockTime;
use crate::error::{FreecalError, Result};
use crate::freebusy::{self, FreeSlot};
use crate::interval::Interval;
use crate::weekday;

/// Work hours, minimum slot length and the zone all wall-clock times are read in.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkdayConfig {
    pub work_start: ClockTime,
    pub work_end: ClockTime,
    pub min_duration: Duration,
    pub tz: Tz,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            work_start: ClockTime { hour: 9, minute: 0 },
            work_end: ClockTime { hour: 17, minute: 0 },
            min_duration: Duration::minutes(60),
            tz: chrono_tz::Asia::Tokyo,
        }
    }
}

impl WorkdayConfig {
    /// The work window on `date`, or `None` if a boundary falls in a DST gap.
    ///
    /// Ambiguous local times resolve to the earlier instant.
    pub fn day_window(&self, date: NaiveDate) -> Option<Interval> {
        let start = local_instant(self.tz, date, self.work_start)?;
        let end = local_instant(self.tz, date, self.work_end)?;
        Some(Interval::new(start, end))
    }
}

fn local_instant(tz: Tz, date: NaiveDate, clock: ClockTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(clock.to_naive_time()))
        .earliest()
}

/// Parse an IANA zone name such as `Asia/Tokyo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| FreecalError::InvalidTimezone(name.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| FreecalError::InvalidDate(s.to_string()))
}

/// Free slots found on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<FreeSlot>,
}

impl DayAvailability {
    pub fn weekday_label(&self) -> &'static str {
        weekday::weekday_label(&self.date)
    }

    /// `- 2025-08-11（月） 09:00~10:00, 11:15~17:00`
    pub fn to_markdown(&self) -> String {
        let slots: Vec<String> = self.slots.iter().map(FreeSlot::to_string).collect();
        format!(
            "- {}（{}） {}",
            self.date.format("%Y-%m-%d"),
            self.weekday_label(),
            slots.join(", ")
        )
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Compute free slots for every weekday in `[start, end]`.
///
/// Saturdays and Sundays are skipped, and days without a qualifying slot are omitted
/// from the result.
///
/// # Errors
/// Returns `FreecalError::InvalidRange` if `end` is before `start`.
pub fn plan_availability(
    start: NaiveDate,
    end: NaiveDate,
    busy: &[Interval],
    config: &WorkdayConfig,
) -> Result<Vec<DayAvailability>> {
    if end < start {
        return Err(FreecalError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut days = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        if is_weekend(date) {
            continue;
        }
        let Some(window) = config.day_window(date) else {
            tracing::warn!(%date, "work hours do not exist in this zone on this date");
            continue;
        };

        let slots = freebusy::find_free_slots(&window, busy, config.min_duration);
        tracing::debug!(%date, slots = slots.len(), "computed free slots");
        if !slots.is_empty() {
            days.push(DayAvailability { date, slots });
        }
    }

    Ok(days)
}

/// One markdown bullet per day, newline-terminated.
pub fn render_markdown(days: &[DayAvailability]) -> String {
    days.iter()
        .map(|day| day.to_markdown() + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_detection() {
        // 2025-08-16 is a Saturday.
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 8, 17).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 8, 18).unwrap()));
    }

    #[test]
    fn local_instant_in_dst_gap_is_none() {
        // Clocks jump 02:00 → 03:00 in New York on 2026-03-08.
        let date = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let clock = ClockTime { hour: 2, minute: 30 };
        assert!(local_instant(chrono_tz::America::New_York, date, clock).is_none());
    }
}
