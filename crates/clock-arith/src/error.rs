//! Error types for clock-arith operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),
}

/// Coarse classification of a [`ClockError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A start time or duration string could not be parsed.
    Parse,
    /// A weekday name did not match any of the seven days.
    Lookup,
}

impl ClockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClockError::InvalidStartTime(_) | ClockError::InvalidDuration(_) => ErrorKind::Parse,
            ClockError::UnknownWeekday(_) => ErrorKind::Lookup,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
