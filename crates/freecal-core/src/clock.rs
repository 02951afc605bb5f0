//! `HH:MM` wall-clock times used to configure the work day.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FreecalError, Result};

/// An hour/minute pair on a 24-hour clock, range-checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
}

impl ClockTime {
    /// Returns `None` when the hour or minute is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Fields are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }
}

/// Parse an `H:MM` or `HH:MM` string: one or two hour digits, a colon, two minute digits.
pub fn parse_clock(s: &str) -> Result<ClockTime> {
    let invalid = || FreecalError::InvalidClock(s.to_string());

    let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
    if !(1..=2).contains(&hh.len()) || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hh.parse().map_err(|_| invalid())?;
    let minute: u32 = mm.parse().map_err(|_| invalid())?;
    ClockTime::new(hour, minute).ok_or_else(invalid)
}

impl FromStr for ClockTime {
    type Err = FreecalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_clock(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_clock(&s).map_err(serde::de::Error::custom)
    }
}
