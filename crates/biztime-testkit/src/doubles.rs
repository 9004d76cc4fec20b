//! Test doubles for calendar consumers.

use std::cell::Cell;

use biztime_calendar::{MarketCalendar, Schedule};
use biztime_types::{CalendarError, DateRange};
use chrono::NaiveDate;

/// A calendar whose every query fails with [`CalendarError::Unavailable`].
#[derive(Debug, Clone)]
pub struct FailingCalendar {
    reason: String,
}

impl FailingCalendar {
    /// Creates a calendar failing with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MarketCalendar for FailingCalendar {
    fn name(&self) -> &str {
        "FAILING"
    }

    fn valid_days(&self, _range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
        Err(CalendarError::Unavailable(self.reason.clone()))
    }

    fn schedule(&self, _range: DateRange) -> Result<Schedule, CalendarError> {
        Err(CalendarError::Unavailable(self.reason.clone()))
    }
}

/// Wraps a calendar and counts the queries made against it.
#[derive(Debug)]
pub struct CountingCalendar<C> {
    inner: C,
    valid_days_calls: Cell<usize>,
    schedule_calls: Cell<usize>,
    last_schedule_range: Cell<Option<DateRange>>,
}

impl<C: MarketCalendar> CountingCalendar<C> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            valid_days_calls: Cell::new(0),
            schedule_calls: Cell::new(0),
            last_schedule_range: Cell::new(None),
        }
    }

    /// Number of `valid_days` queries so far (including `is_valid_day`).
    #[must_use]
    pub fn valid_days_calls(&self) -> usize {
        self.valid_days_calls.get()
    }

    /// Number of `schedule` queries so far.
    #[must_use]
    pub fn schedule_calls(&self) -> usize {
        self.schedule_calls.get()
    }

    /// Range of the most recent `schedule` query.
    #[must_use]
    pub fn last_schedule_range(&self) -> Option<DateRange> {
        self.last_schedule_range.get()
    }
}

impl<C: MarketCalendar> MarketCalendar for CountingCalendar<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
        self.valid_days_calls.set(self.valid_days_calls.get() + 1);
        self.inner.valid_days(range)
    }

    fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError> {
        self.schedule_calls.set(self.schedule_calls.get() + 1);
        self.last_schedule_range.set(Some(range));
        self.inner.schedule(range)
    }
}
