//! Half-open time intervals and the two boundary rules applied to them.
//!
//! [`overlap`] treats touching intervals as disjoint (`a.end == b.start` is not an
//! overlap), while [`merge`] coalesces them into one continuous block. Free-slot
//! derivation relies on both rules at once, so they must not be unified.
//!
//! Degenerate intervals (`end <= start`) are never rejected on construction. They are
//! empty: [`overlap`] never returns one, and callers drop them before merging.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// A half-open range `[start, end)` of zone-aware instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl Interval {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// `end - start`. Negative for degenerate intervals.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the interval covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Intersect two intervals.
///
/// Returns `None` unless the intersection has positive length, so adjacent intervals
/// (one ends exactly when the other starts) do not overlap.
pub fn overlap(a: &Interval, b: &Interval) -> Option<Interval> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if end > start {
        Some(Interval { start, end })
    } else {
        None
    }
}

/// Sort and coalesce intervals into an ascending, pairwise disjoint list.
///
/// Overlapping and adjacent intervals are merged. Empty input yields an empty list.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for cur in intervals {
        if let Some(last) = merged.last_mut() {
            if cur.start <= last.end {
                // Overlapping, adjacent or contained: grow the block if needed.
                if cur.end > last.end {
                    last.end = cur.end;
                }
                continue;
            }
        }
        merged.push(cur);
    }

    tracing::trace!(blocks = merged.len(), "merged busy intervals");
    merged
}
