//! The `freecal` CLI prints free weekday slots within business hours.
//!
//! Events come from a calendar collaborator as JSON (a bare array of events or one or
//! more Google Calendar `events.list` pages).
//!
//! ## Usage
//!
//! ```sh
//! # Events on stdin, default 09:00-17:00 in Asia/Tokyo, slots of at least 60 minutes
//! freecal --start 2025-08-11 --end 2025-08-14 < events.json
//!
//! # Several pages, custom hours and minimum
//! freecal -e page1.json -e page2.json --start 2025-08-11 --end 2025-08-14 \
//!   --workstart 10:00 --workend 18:30 --min 30 --tz Europe/Berlin
//!
//! # Machine-readable output
//! freecal -e events.json --start 2025-08-11 --end 2025-08-14 --format json
//! ```

use anyhow::{Context, Result};
use chrono::Duration;
use clap::{Parser, ValueEnum};
use freecal_core::{DayAvailability, WorkdayConfig};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "freecal",
    version,
    about = "Print free weekday time slots within business hours"
)]
struct Cli {
    /// Event JSON file; repeat for multiple pages (reads stdin if omitted)
    #[arg(short, long = "events")]
    events: Vec<String>,

    /// First date of the range (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// Last date of the range, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end: String,

    /// Workday start (HH:MM)
    #[arg(long, default_value = "09:00")]
    workstart: String,

    /// Workday end (HH:MM)
    #[arg(long, default_value = "17:00")]
    workend: String,

    /// Minimum free slot length in minutes
    #[arg(long, default_value_t = 60)]
    min: u32,

    /// IANA timezone (e.g., Asia/Tokyo)
    #[arg(long, default_value = "Asia/Tokyo")]
    tz: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Serialize)]
struct FreeSlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
    label: String,
}

#[derive(Serialize)]
struct DayDto {
    date: String,
    weekday: &'static str,
    slots: Vec<FreeSlotDto>,
}

impl From<&DayAvailability> for DayDto {
    fn from(day: &DayAvailability) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            weekday: day.weekday_label(),
            slots: day
                .slots
                .iter()
                .map(|s| FreeSlotDto {
                    start: s.start.to_rfc3339(),
                    end: s.end.to_rfc3339(),
                    duration_minutes: s.duration_minutes,
                    label: s.to_string(),
                })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tz = freecal_core::parse_timezone(&cli.tz).context("Invalid --tz")?;
    let start = freecal_core::parse_date(&cli.start).context("Invalid --start")?;
    let end = freecal_core::parse_date(&cli.end).context("Invalid --end")?;
    let config = WorkdayConfig {
        work_start: freecal_core::parse_clock(&cli.workstart).context("Invalid --workstart")?,
        work_end: freecal_core::parse_clock(&cli.workend).context("Invalid --workend")?,
        min_duration: Duration::minutes(i64::from(cli.min)),
        tz,
    };

    let events = read_events(&cli.events)?;
    let busy = freecal_core::events_to_intervals(&events, tz);
    tracing::debug!(events = events.len(), busy = busy.len(), "loaded events");

    let days = freecal_core::plan_availability(start, end, &busy, &config)
        .context("Failed to compute free slots")?;

    match cli.format {
        Format::Markdown => print!("{}", freecal_core::render_markdown(&days)),
        Format::Json => {
            let dtos: Vec<DayDto> = days.iter().map(DayDto::from).collect();
            println!("{}", serde_json::to_string_pretty(&dtos)?);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for the slot listing.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_events(paths: &[String]) -> Result<Vec<freecal_core::CalendarEvent>> {
    if paths.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return freecal_core::parse_events_json(&buf).context("Failed to parse events from stdin");
    }

    let mut events = Vec::new();
    for path in paths {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?;
        let page = freecal_core::parse_events_json(&json)
            .with_context(|| format!("Failed to parse events in {}", path))?;
        events.extend(page);
    }
    Ok(events)
}
