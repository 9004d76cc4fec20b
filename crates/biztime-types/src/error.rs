//! Error types for biztime.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::IntervalUnit;

/// Result type alias for biztime operations.
pub type Result<T> = std::result::Result<T, BizTimeError>;

/// Errors that can occur while walking back through business intervals.
#[derive(Error, Debug)]
pub enum BizTimeError {
    /// The interval text could not be parsed.
    #[error(transparent)]
    Interval(#[from] IntervalParseError),

    /// The interval unit parsed but the backward walk has no step for it.
    #[error("Unsupported interval unit: {0}")]
    UnsupportedUnit(IntervalUnit),

    /// The lookback floor was reached before enough business intervals were found.
    #[error("Insufficient history: found {satisfied} of {target} business intervals before {floor}")]
    InsufficientHistory {
        /// Number of business intervals requested.
        target: u32,
        /// Number of business intervals found before the floor.
        satisfied: u32,
        /// The lookback floor that stopped the walk.
        floor: DateTime<Utc>,
    },

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// The business calendar failed to answer a query.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Error returned when parsing an invalid interval string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalParseError {
    /// The text is not `"<magnitude> <unit>"` or the magnitude is not a positive integer.
    #[error("Malformed interval '{input}', expected '<magnitude> <unit>' such as '30 minute'")]
    Malformed {
        /// The rejected input.
        input: String,
    },

    /// The unit is neither `day` nor `minute`.
    #[error("Unknown interval unit '{unit}', expected one of: day, minute")]
    UnrecognizedUnit {
        /// The rejected unit token (lower-cased).
        unit: String,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Errors reported by a business calendar implementation.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// The calendar backend could not be reached or queried.
    #[error("Calendar unavailable: {0}")]
    Unavailable(String),

    /// The calendar has no data for part of the requested range.
    #[error("Calendar has no data for {start} to {end}")]
    NoCoverage {
        /// First date of the uncovered range.
        start: NaiveDate,
        /// Last date of the uncovered range.
        end: NaiveDate,
    },

    /// Any other failure raised by the calendar implementation.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_calendar_error_is_transparent() {
        let err = BizTimeError::from(CalendarError::Unavailable("timeout".to_string()));
        assert_eq!(err.to_string(), "Calendar unavailable: timeout");
        assert!(matches!(
            err,
            BizTimeError::Calendar(CalendarError::Unavailable(_))
        ));
    }

    #[test]
    fn test_other_calendar_error_keeps_source_message() {
        let inner: Box<dyn std::error::Error + Send + Sync> = "disk read failed".into();
        let err = CalendarError::from(inner);
        assert_eq!(err.to_string(), "disk read failed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_interval_error_display() {
        let err = IntervalParseError::UnrecognizedUnit {
            unit: "hour".to_string(),
        };
        assert!(err.to_string().contains("'hour'"));
    }
}
