//! Elapsed-time components, stopwatch-style formatting and date
//! reformatting.

use std::fmt::Write;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// A span of time in seconds, as produced by timers and workout trackers.
///
/// Components truncate toward zero, so negative spans format with a sign
/// on each component.
///
/// # Example
///
/// ```rust
/// use garnish::time::Elapsed;
///
/// let lap = Elapsed::from_secs(3725.5);
/// assert_eq!(lap.workout_time(), "01h02'05.05");
/// assert_eq!(lap.hours_minutes_seconds(), "01:02:05");
/// assert_eq!(Elapsed::from_secs(125.5).minutes_seconds_millis(), "2:05.500");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Elapsed {
    seconds: f64,
}

impl Elapsed {
    pub fn from_secs(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn as_secs(&self) -> f64 {
        self.seconds
    }

    pub fn hours(&self) -> i64 {
        ((self.seconds / 3600.0) % 3600.0) as i64
    }

    /// Minutes within the hour.
    pub fn minutes(&self) -> i64 {
        ((self.seconds / 60.0) % 60.0) as i64
    }

    /// Seconds within the minute.
    pub fn seconds(&self) -> i64 {
        (self.seconds % 60.0) as i64
    }

    /// Milliseconds within the second.
    pub fn milliseconds(&self) -> i64 {
        ((self.seconds * 1000.0) % 1000.0) as i64
    }

    /// `HHhMM'SS.TT`, dropping the hour part when it is zero. `TT` is the
    /// tenth of a second, zero padded to two digits.
    pub fn workout_time(&self) -> String {
        let tenths = self.milliseconds() / 100;
        if self.hours() > 0 {
            format!(
                "{:02}h{:02}'{:02}.{:02}",
                self.hours(),
                self.minutes(),
                self.seconds(),
                tenths
            )
        } else {
            format!("{:02}'{:02}.{:02}", self.minutes(), self.seconds(), tenths)
        }
    }

    /// `HH:MM:SS`.
    pub fn hours_minutes_seconds(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }

    /// `M:SS.mmm`.
    pub fn minutes_seconds_millis(&self) -> String {
        format!(
            "{}:{:02}.{:03}",
            self.minutes(),
            self.seconds(),
            self.milliseconds()
        )
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Elapsed::from_secs(duration.as_secs_f64())
    }
}

impl From<f64> for Elapsed {
    fn from(seconds: f64) -> Self {
        Elapsed::from_secs(seconds)
    }
}

/// Parses an ISO 8601 date (`2024-03-09`) or RFC 3339 timestamp
/// (`2024-03-09T14:30:00+01:00`) and writes it with a `strftime` pattern.
///
/// Returns `None` when the text is not such a date, when the pattern has an
/// unknown specifier, or when the pattern asks for a time of day that a bare
/// date does not carry.
///
/// # Example
///
/// ```rust
/// use garnish::time::reformat_iso_date;
///
/// assert_eq!(
///     reformat_iso_date("2024-03-09", "%B %-d, %Y").as_deref(),
///     Some("March 9, 2024")
/// );
/// assert_eq!(reformat_iso_date("yesterday", "%d/%m/%Y"), None);
/// ```
pub fn reformat_iso_date(text: &str, format: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::debug!(format, "rejecting invalid date format");
        return None;
    }

    let text = text.trim();
    let delayed = match NaiveDate::parse_from_str(text, ISO_DATE) {
        Ok(date) => date.format_with_items(items.iter()),
        Err(_) => match DateTime::parse_from_rfc3339(text) {
            Ok(timestamp) => timestamp.format_with_items(items.iter()),
            Err(err) => {
                tracing::debug!(text, %err, "not an ISO date");
                return None;
            }
        },
    };

    let mut out = String::new();
    write!(out, "{}", delayed).ok()?;
    Some(out)
}
