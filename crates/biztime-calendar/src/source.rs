//! Polymorphic schedule source.

use std::borrow::Cow;

use biztime_types::{CalendarError, DateRange};

use crate::{MarketCalendar, Schedule};

/// Where business-day and business-hour answers come from.
#[derive(Clone, Copy)]
pub enum ScheduleSource<'a> {
    /// A live calendar, queried on every lookup.
    Live(&'a dyn MarketCalendar),
    /// A schedule table fetched ahead of time.
    Materialized(&'a Schedule),
}

impl<'a> ScheduleSource<'a> {
    /// Wraps a live calendar.
    #[must_use]
    pub const fn live(calendar: &'a dyn MarketCalendar) -> Self {
        Self::Live(calendar)
    }

    /// Wraps a materialized schedule.
    #[must_use]
    pub const fn materialized(schedule: &'a Schedule) -> Self {
        Self::Materialized(schedule)
    }

    /// Returns true for the [`ScheduleSource::Live`] variant.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Returns a schedule table for `range`.
    ///
    /// A live calendar is queried once. A materialized schedule is borrowed
    /// as-is; it is the caller's job to have fetched it wide enough.
    ///
    /// # Errors
    ///
    /// Returns the calendar's error if the live query fails.
    pub fn materialize(&self, range: DateRange) -> Result<Cow<'a, Schedule>, CalendarError> {
        match *self {
            Self::Live(calendar) => calendar.schedule(range).map(Cow::Owned),
            Self::Materialized(schedule) => Ok(Cow::Borrowed(schedule)),
        }
    }
}

impl std::fmt::Debug for ScheduleSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live(calendar) => f.debug_tuple("Live").field(&calendar.name()).finish(),
            Self::Materialized(schedule) => f
                .debug_tuple("Materialized")
                .field(&schedule.date_range())
                .finish(),
        }
    }
}

impl<'a> From<&'a Schedule> for ScheduleSource<'a> {
    fn from(schedule: &'a Schedule) -> Self {
        Self::Materialized(schedule)
    }
}

impl<'a> From<&'a dyn MarketCalendar> for ScheduleSource<'a> {
    fn from(calendar: &'a dyn MarketCalendar) -> Self {
        Self::Live(calendar)
    }
}
