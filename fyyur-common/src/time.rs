//! Timestamp utilities
//!
//! Show start times are stored as naive local date-times, so "now" is the
//! local wall clock without a timezone.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::{Error, Result};

/// Source of the current time, injected into handlers
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Display formats for show start times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
}

/// Format a start time for display
pub fn format_datetime(value: NaiveDateTime, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Format a start time the way it is written in the show form
pub fn format_form_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a start time from form input
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]` and the `T`-separated form sent by
/// `datetime-local` inputs.
pub fn parse_start_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| Error::InvalidInput(format!("Invalid start time: {}", input)))
}

/// Current time truncated to whole seconds, used as the show form default
pub fn form_default_start(clock: &dyn Clock) -> NaiveDateTime {
    let now = clock.now();
    now.with_nanosecond(0).unwrap_or(now)
}
