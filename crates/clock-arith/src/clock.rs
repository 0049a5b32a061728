//! 12-hour clock times and hours:minutes durations.
//!
//! Both types parse from and render to the exact string forms the adder
//! accepts: `"H:MM AM"` / `"H:MM PM"` for a [`ClockTime`] and `"H:MM"` for a
//! [`Duration`]. Parsing is strict and never guesses; anything outside those
//! two shapes is rejected with a parse error that quotes the input.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ClockError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ── Meridiem ────────────────────────────────────────────────────────────────

/// Half of the day a 12-hour time falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("am") {
            Ok(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("pm") {
            Ok(Meridiem::Pm)
        } else {
            Err(ClockError::InvalidStartTime(format!(
                "expected AM or PM, got '{s}'"
            )))
        }
    }
}

// ── ClockTime ───────────────────────────────────────────────────────────────

/// A wall-clock time in 12-hour form.
///
/// Always holds `hour` in `1..=12` and `minute` in `0..=59`; the only ways to
/// build one are [`ClockTime::new`], [`ClockTime::from_minute_of_day`] and
/// [`FromStr`], all of which enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    period: Meridiem,
}

impl ClockTime {
    /// Build a clock time, rejecting hours outside 1-12 and minutes outside 0-59.
    ///
    /// # Examples
    ///
    /// ```
    /// use clock_arith::{ClockTime, Meridiem};
    ///
    /// let t = ClockTime::new(3, 5, Meridiem::Pm).unwrap();
    /// assert_eq!(t.to_string(), "3:05 PM");
    /// assert!(ClockTime::new(13, 0, Meridiem::Am).is_err());
    /// ```
    pub fn new(hour: u32, minute: u32, period: Meridiem) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ClockError::InvalidStartTime(format!(
                "hour must be 1-12, got {hour}"
            )));
        }
        if minute > 59 {
            return Err(ClockError::InvalidStartTime(format!(
                "minute must be 0-59, got {minute}"
            )));
        }
        Ok(ClockTime {
            hour,
            minute,
            period,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn period(&self) -> Meridiem {
        self.period
    }

    /// Hour on a 24-hour clock (0-23). 12 AM is midnight, 12 PM is noon.
    pub fn hour24(&self) -> u32 {
        match (self.hour, self.period) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        }
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minute_of_day(&self) -> u32 {
        self.hour24() * 60 + self.minute
    }

    /// Inverse of [`minute_of_day`](Self::minute_of_day). Values of a day or
    /// more wrap around midnight.
    pub fn from_minute_of_day(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self::from_hour24(minutes / 60, minutes % 60)
    }

    /// Fold a 24-hour hour (0-23) and minute back into 12-hour form.
    pub(crate) fn from_hour24(hour24: u32, minute: u32) -> Self {
        debug_assert!(hour24 < 24 && minute < 60);
        let (hour, period) = if hour24 >= 12 {
            let h = if hour24 > 12 { hour24 - 12 } else { hour24 };
            (h, Meridiem::Pm)
        } else {
            let h = if hour24 == 0 { 12 } else { hour24 };
            (h, Meridiem::Am)
        };
        ClockTime {
            hour,
            minute,
            period,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Parse `"H:MM AM"` or `"H:MM PM"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let (time, period) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(time), Some(period), None) => (time, period),
            _ => {
                return Err(ClockError::InvalidStartTime(format!(
                    "expected 'H:MM AM|PM', got '{s}'"
                )));
            }
        };

        let (hour, minute) = time.split_once(':').ok_or_else(|| {
            ClockError::InvalidStartTime(format!("missing ':' in '{s}'"))
        })?;
        if minute.len() != 2 {
            return Err(ClockError::InvalidStartTime(format!(
                "minute must be two digits in '{s}'"
            )));
        }

        let hour: u32 = parse_digits(hour)
            .ok_or_else(|| ClockError::InvalidStartTime(format!("invalid hour in '{s}'")))?;
        let minute: u32 = parse_digits(minute)
            .ok_or_else(|| ClockError::InvalidStartTime(format!("invalid minute in '{s}'")))?;
        let period: Meridiem = period.parse()?;

        ClockTime::new(hour, minute, period)
            .map_err(|e| ClockError::InvalidStartTime(format!("'{s}': {}", inner_message(&e))))
    }
}

// ── Duration ────────────────────────────────────────────────────────────────

/// Elapsed hours and minutes to add to a [`ClockTime`].
///
/// Hours are unbounded. Minutes are kept as given (`"1:75"` stays 1 h 75 min)
/// and only normalized when the duration is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
}

impl Duration {
    pub fn new(hours: u64, minutes: u64) -> Self {
        Duration { hours, minutes }
    }

    /// Total length in minutes, or `None` if it does not fit in a `u64`.
    pub fn total_minutes(&self) -> Option<u64> {
        self.hours.checked_mul(60)?.checked_add(self.minutes)
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for Duration {
    type Err = ClockError;

    /// Parse `"H:MM"`, where `H` is any number of digits and `MM` is one or
    /// two digits (not limited to 59).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (hours, minutes) = trimmed
            .split_once(':')
            .ok_or_else(|| ClockError::InvalidDuration(format!("expected 'H:MM', got '{s}'")))?;

        if minutes.contains(':') {
            return Err(ClockError::InvalidDuration(format!(
                "expected 'H:MM', got '{s}'"
            )));
        }
        if minutes.len() > 2 {
            return Err(ClockError::InvalidDuration(format!(
                "minutes must be at most two digits in '{s}'"
            )));
        }

        let hours: u64 = parse_digits(hours)
            .ok_or_else(|| ClockError::InvalidDuration(format!("invalid hours in '{s}'")))?;
        let minutes: u64 = parse_digits(minutes)
            .ok_or_else(|| ClockError::InvalidDuration(format!("invalid minutes in '{s}'")))?;

        Ok(Duration { hours, minutes })
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse a non-empty run of ASCII digits. Rejects signs and whitespace, which
/// `str::parse` would otherwise accept (`"+5"`).
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn inner_message(e: &ClockError) -> &str {
    match e {
        ClockError::InvalidStartTime(m)
        | ClockError::InvalidDuration(m)
        | ClockError::UnknownWeekday(m) => m,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
