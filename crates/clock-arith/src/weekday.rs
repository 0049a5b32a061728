//! Weekday names and cyclic rollover.
//!
//! Days are ordered Sunday through Saturday. Input names are matched after
//! normalizing case (first letter upper, rest lower), so `"tueSday"` and
//! `"TUESDAY"` both resolve to Tuesday. Abbreviations are not accepted.

use chrono::Weekday;

use crate::error::{ClockError, Result};

/// The seven days in rollover order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Canonical capitalized name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Resolve a full weekday name, ignoring case.
///
/// # Errors
///
/// Returns [`ClockError::UnknownWeekday`] if the normalized name is not one of
/// the seven days.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use clock_arith::weekday::parse_weekday;
///
/// assert_eq!(parse_weekday("tueSday").unwrap(), Weekday::Tue);
/// assert!(parse_weekday("Tue").is_err());
/// ```
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let normalized = capitalize(name);
    WEEK.iter()
        .copied()
        .find(|&day| weekday_name(day) == normalized)
        .ok_or_else(|| ClockError::UnknownWeekday(format!("'{name}'")))
}

/// Step `days` positions forward from `start`, wrapping every seven.
pub fn advance(start: Weekday, days: u64) -> Weekday {
    let index = start.num_days_from_sunday() as u64;
    WEEK[((index + days % 7) % 7) as usize]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
