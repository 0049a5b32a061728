//! # clock-arith
//!
//! Deterministic 12-hour clock arithmetic.
//!
//! Given a start time such as `"11:43 PM"`, a duration such as `"24:20"`
//! (hours unbounded, minutes may exceed 59) and optionally the weekday of the
//! start, compute the resulting time, the weekday reached, and how many days
//! later it is:
//!
//! ```
//! use clock_arith::add_time;
//!
//! let result = add_time("8:16 PM", "466:02", Some("tuesday")).unwrap();
//! assert_eq!(result, "6:18 AM, Monday (20 days later)");
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — `ClockTime` and `Duration` parsing and rendering
//! - [`weekday`] — Weekday name lookup and rollover
//! - [`adder`] — The addition itself and its structured result
//! - [`error`] — Error types

pub mod adder;
pub mod clock;
pub mod error;
pub mod weekday;

pub use adder::{add_duration, add_time, add_time_detailed, day_offset_suffix, AddedTime};
pub use chrono::Weekday;
pub use clock::{ClockTime, Duration, Meridiem, MINUTES_PER_DAY};
pub use error::{ClockError, ErrorKind, Result};
