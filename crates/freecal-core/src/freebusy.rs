//! Compute free time slots inside a work-day window.
//!
//! Busy intervals are clipped to the window, merged, then swept with a single cursor.
//! Gaps shorter than the requested minimum are dropped.

use std::fmt;

use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;

use crate::interval::{self, Interval};

/// A free time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeSlot {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub duration_minutes: i64,
}

impl FreeSlot {
    fn from_interval(iv: Interval) -> Self {
        Self {
            start: iv.start,
            end: iv.end,
            duration_minutes: iv.duration().num_minutes(),
        }
    }
}

/// `HH:MM~HH:MM` in local 24-hour wall-clock time.
impl fmt::Display for FreeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}~{:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

/// Clip busy intervals to the window and merge them.
///
/// Returns a sorted, non-overlapping list confined to `window`.
fn merge_busy_periods(window: &Interval, busy: &[Interval]) -> Vec<Interval> {
    let clipped: Vec<Interval> = busy
        .iter()
        .filter_map(|b| interval::overlap(b, window))
        .collect();
    interval::merge(clipped)
}

/// Find free slots of at least `min_duration` within `window`.
///
/// A slot of exactly `min_duration` qualifies. A degenerate window (`end <= start`)
/// has no free time and yields an empty list.
pub fn find_free_slots(
    window: &Interval,
    busy: &[Interval],
    min_duration: Duration,
) -> Vec<FreeSlot> {
    let merged = merge_busy_periods(window, busy);

    let mut gaps = Vec::new();
    let mut cursor = window.start;

    for b in &merged {
        if b.start > cursor {
            gaps.push(Interval::new(cursor, b.start));
        }
        cursor = cursor.max(b.end);
    }

    // Trailing gap after the last busy period.
    if cursor < window.end {
        gaps.push(Interval::new(cursor, window.end));
    }

    gaps.into_iter()
        .filter(|gap| gap.duration() >= min_duration)
        .map(FreeSlot::from_interval)
        .collect()
}

/// Same as [`find_free_slots`], formatted as `HH:MM~HH:MM` strings.
pub fn free_slots(window: &Interval, busy: &[Interval], min_duration: Duration) -> Vec<String> {
    find_free_slots(window, busy, min_duration)
        .iter()
        .map(FreeSlot::to_string)
        .collect()
}
