//! # freecal-core
//!
//! Free time slots inside business hours, computed from calendar events.
//!
//! Events are converted into busy intervals in one fixed zone, clipped to each work day,
//! merged, and subtracted from the work window. What remains, filtered by a minimum
//! length, is reported per weekday as `HH:MM~HH:MM` slots.
//!
//! ## Modules
//!
//! - [`interval`]: Half-open intervals, overlap and merge
//! - [`freebusy`]: Free slots within one work-day window
//! - [`clock`]: `HH:MM` work-hour parsing
//! - [`weekday`]: Japanese single-character weekday labels
//! - [`event`]: Calendar event JSON and busy-interval conversion
//! - [`planner`]: Weekday iteration over a date range and markdown output
//! - [`error`]: Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod interval;
pub mod planner;
pub mod weekday;

pub use clock::{parse_clock, ClockTime};
pub use error::FreecalError;
pub use event::{events_to_intervals, parse_events_json, CalendarEvent, EventTime};
pub use freebusy::{find_free_slots, free_slots, FreeSlot};
pub use interval::{merge, overlap, Interval};
pub use planner::{
    parse_date, parse_timezone, plan_availability, render_markdown, DayAvailability,
    WorkdayConfig,
};
pub use weekday::weekday_label;
