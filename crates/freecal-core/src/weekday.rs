//! Single-character Japanese weekday labels.

use chrono::{Datelike, Weekday};

/// Label for a weekday: 月 火 水 木 金 土 日.
pub fn label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

/// Label for the weekday of any date-like value.
pub fn weekday_label<D: Datelike>(date: &D) -> &'static str {
    label(date.weekday())
}
