//! Adding a duration to a 12-hour clock time.
//!
//! The start time is folded onto a 24-hour clock, the duration's minutes and
//! hours are carried into it, and the number of midnights crossed becomes
//! `days_later`. The result is rendered back in 12-hour form, optionally
//! followed by the weekday reached and a day-offset note:
//!
//! ```text
//! 12:03 AM, Thursday (2 days later)
//! ```
//!
//! Everything here is pure: no clock reads, no shared state.

use std::fmt;

use chrono::Weekday;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::clock::{ClockTime, Duration};
use crate::error::{ClockError, Result};
use crate::weekday::{advance, parse_weekday, weekday_name};

/// The outcome of adding a [`Duration`] to a [`ClockTime`].
///
/// `Display` renders the full result line; serialization produces
/// `{"time", "weekday", "days_later", "display"}` with the weekday spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedTime {
    /// The resulting wall-clock time.
    pub time: ClockTime,
    /// The weekday reached, present only when a start day was supplied.
    pub weekday: Option<Weekday>,
    /// Number of midnights crossed.
    pub days_later: u64,
}

impl fmt::Display for AddedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if let Some(day) = self.weekday {
            write!(f, ", {}", weekday_name(day))?;
        }
        if let Some(suffix) = day_offset_suffix(self.days_later) {
            write!(f, " {suffix}")?;
        }
        Ok(())
    }
}

impl Serialize for AddedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AddedTime", 4)?;
        s.serialize_field("time", &self.time.to_string())?;
        s.serialize_field("weekday", &self.weekday.map(weekday_name))?;
        s.serialize_field("days_later", &self.days_later)?;
        s.serialize_field("display", &self.to_string())?;
        s.end()
    }
}

/// Add a duration string to a start time string.
///
/// # Arguments
///
/// * `start` — A 12-hour time, `"H:MM AM"` or `"H:MM PM"`
/// * `duration` — Hours and minutes to add, `"H:MM"` (hours unbounded, minutes may exceed 59)
/// * `start_day` — Optional weekday name for `start`, any letter case
///
/// An empty `start_day` is treated the same as `None`.
///
/// # Errors
///
/// Returns [`ClockError::InvalidStartTime`] or [`ClockError::InvalidDuration`]
/// for malformed inputs, and [`ClockError::UnknownWeekday`] if `start_day`
/// does not name a day of the week.
///
/// # Examples
///
/// ```
/// use clock_arith::add_time;
///
/// assert_eq!(add_time("3:00 PM", "3:10", None).unwrap(), "6:10 PM");
/// assert_eq!(
///     add_time("11:43 PM", "24:20", Some("tueSday")).unwrap(),
///     "12:03 AM, Thursday (2 days later)"
/// );
/// ```
pub fn add_time(start: &str, duration: &str, start_day: Option<&str>) -> Result<String> {
    add_time_detailed(start, duration, start_day).map(|added| added.to_string())
}

/// Like [`add_time`], but returns the structured [`AddedTime`].
pub fn add_time_detailed(
    start: &str,
    duration: &str,
    start_day: Option<&str>,
) -> Result<AddedTime> {
    let start: ClockTime = start.parse()?;
    let duration: Duration = duration.parse()?;
    let start_day = start_day
        .filter(|name| !name.is_empty())
        .map(parse_weekday)
        .transpose()?;

    add_duration(start, duration, start_day)
}

/// Add a parsed [`Duration`] to a [`ClockTime`].
///
/// # Errors
///
/// Returns [`ClockError::InvalidDuration`] if the duration is so large that
/// the hour count overflows.
pub fn add_duration(
    start: ClockTime,
    duration: Duration,
    start_day: Option<Weekday>,
) -> Result<AddedTime> {
    tracing::debug!(%start, %duration, ?start_day, "adding duration");

    let minutes = start.minute() as u64 + duration.minutes;
    let carry_hours = minutes / 60;
    let minute = (minutes % 60) as u32;

    let hours = (start.hour24() as u64)
        .checked_add(duration.hours)
        .and_then(|h| h.checked_add(carry_hours))
        .ok_or_else(|| ClockError::InvalidDuration(format!("'{duration}' is too large")))?;

    let days_later = hours / 24;
    let time = ClockTime::from_hour24((hours % 24) as u32, minute);
    let weekday = start_day.map(|day| advance(day, days_later));

    tracing::trace!(%time, days_later, "duration added");

    Ok(AddedTime {
        time,
        weekday,
        days_later,
    })
}

/// The parenthesized note for a day offset: none for the same day,
/// `"(next day)"` for one, `"(N days later)"` beyond that.
pub fn day_offset_suffix(days_later: u64) -> Option<String> {
    match days_later {
        0 => None,
        1 => Some("(next day)".to_string()),
        n => Some(format!("({n} days later)")),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
