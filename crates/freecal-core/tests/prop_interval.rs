//! Property-based tests for the interval algebra using proptest.
//!
//! Intervals are generated as minute offsets within a single Tokyo day so that every
//! boundary case (adjacency, containment, identical starts) shows up often.

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::{Asia::Tokyo, Tz};
use freecal_core::freebusy::find_free_slots;
use freecal_core::interval::{merge, overlap, Interval};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base() -> DateTime<Tz> {
    Tokyo.with_ymd_and_hms(2025, 8, 11, 0, 0, 0).unwrap()
}

fn minute(m: i64) -> DateTime<Tz> {
    base() + Duration::minutes(m)
}

/// Non-empty interval with start in 0..1440 and length 1..240 minutes.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i64..1440, 1i64..=240).prop_map(|(s, len)| Interval::new(minute(s), minute(s + len)))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..20)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_interval(), b in arb_interval()) {
        prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
    }

    #[test]
    fn overlap_lies_within_both(a in arb_interval(), b in arb_interval()) {
        if let Some(o) = overlap(&a, &b) {
            prop_assert!(o.start < o.end);
            prop_assert!(o.start >= a.start && o.end <= a.end);
            prop_assert!(o.start >= b.start && o.end <= b.end);
        }
    }

    #[test]
    fn merge_is_idempotent(xs in arb_intervals()) {
        let once = merge(xs);
        let twice = merge(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_output_sorted_and_separated(xs in arb_intervals()) {
        let merged = merge(xs);
        for pair in merged.windows(2) {
            // Strictly apart: adjacent blocks would have been coalesced.
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn merge_covers_every_input(xs in arb_intervals()) {
        let merged = merge(xs.clone());
        for x in &xs {
            prop_assert!(
                merged.iter().any(|m| m.start <= x.start && x.end <= m.end),
                "input {:?} not covered by {:?}", x, merged
            );
        }
    }

    #[test]
    fn free_slots_avoid_busy_time(
        busy in arb_intervals(),
        min in 0i64..=120,
    ) {
        let window = Interval::new(minute(9 * 60), minute(17 * 60));
        let slots = find_free_slots(&window, &busy, Duration::minutes(min));
        for slot in &slots {
            let slot_iv = Interval::new(slot.start, slot.end);
            prop_assert!(slot.start >= window.start && slot.end <= window.end);
            prop_assert!(slot.duration_minutes >= min);
            for b in &busy {
                prop_assert!(overlap(&slot_iv, b).is_none());
            }
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }
}
