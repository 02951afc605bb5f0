//! Error types for freecal operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreecalError {
    #[error("Invalid time {0:?} (want HH:MM)")]
    InvalidClock(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date {0:?} (want YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: String, end: String },

    #[error("Event JSON error: {0}")]
    EventJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FreecalError>;
