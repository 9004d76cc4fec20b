//! Business-day and business-hour membership tests.

use biztime_calendar::ScheduleSource;
use biztime_types::{CalendarError, DateRange};
use chrono::{DateTime, TimeZone};

/// Returns true if `instant` falls on a trading day of `source`.
///
/// The date is taken in the instant's own timezone. A live calendar is asked
/// for the valid days of that single date; a schedule table answers from its
/// indexed dates.
///
/// # Errors
///
/// Returns the calendar's error if a live query fails.
pub fn is_business_day<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    source: ScheduleSource<'_>,
) -> Result<bool, CalendarError> {
    match source {
        ScheduleSource::Live(calendar) => calendar.is_valid_day(instant.date_naive()),
        ScheduleSource::Materialized(schedule) => Ok(schedule.is_business_day(instant)),
    }
}

/// Returns true if `instant` falls inside a trading session of `source`.
///
/// A live calendar treats the close as part of the session
/// (`open <= instant <= close`), a schedule table does not
/// (`open <= instant < close`).
///
/// # Errors
///
/// Returns the calendar's error if a live query fails.
pub fn is_business_hour<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    source: ScheduleSource<'_>,
) -> Result<bool, CalendarError> {
    match source {
        ScheduleSource::Live(calendar) => {
            let schedule = calendar.schedule(DateRange::single_day(instant.date_naive()))?;
            Ok(schedule
                .sessions()
                .any(|(_, session)| session.contains_inclusive(instant)))
        }
        ScheduleSource::Materialized(schedule) => Ok(schedule.is_open_at(instant)),
    }
}
