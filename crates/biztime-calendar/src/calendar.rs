//! The live business calendar capability.

use biztime_types::{CalendarError, DateRange};
use chrono::NaiveDate;

use crate::Schedule;

/// A market calendar that can be queried for trading days and sessions.
///
/// Implementations own the holiday rules, session times and timezone of an
/// exchange. Queries may be expensive (network or disk); callers that need
/// many lookups should materialize a [`Schedule`] once and query that.
pub trait MarketCalendar {
    /// Returns the calendar name (e.g. `"XPAR"`).
    fn name(&self) -> &str;

    /// Returns the valid trading days in `range`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot answer for the range.
    fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError>;

    /// Returns the trading sessions in `range`, one per trading day.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot answer for the range.
    fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError>;

    /// Returns true if `date` is a valid trading day.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot answer for the date.
    fn is_valid_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        Ok(!self.valid_days(DateRange::single_day(date))?.is_empty())
    }
}

impl<C: MarketCalendar + ?Sized> MarketCalendar for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
        (**self).valid_days(range)
    }

    fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError> {
        (**self).schedule(range)
    }

    fn is_valid_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        (**self).is_valid_day(date)
    }
}

impl<C: MarketCalendar + ?Sized> MarketCalendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
        (**self).valid_days(range)
    }

    fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError> {
        (**self).schedule(range)
    }

    fn is_valid_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        (**self).is_valid_day(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biztime_types::Session;
    use chrono::{Datelike, TimeZone, Utc, Weekday};

    /// Weekdays trade 08:00-16:00 UTC.
    #[derive(Debug)]
    struct WeekdayCalendar;

    impl MarketCalendar for WeekdayCalendar {
        fn name(&self) -> &str {
            "WEEKDAYS"
        }

        fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
            Ok(range
                .days()
                .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .collect())
        }

        fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError> {
            Ok(self
                .valid_days(range)?
                .into_iter()
                .map(|d| {
                    let open = Utc.from_utc_datetime(&d.and_hms_opt(8, 0, 0).unwrap());
                    let close = Utc.from_utc_datetime(&d.and_hms_opt(16, 0, 0).unwrap());
                    (d, Session::new(open, close))
                })
                .collect())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_valid_day_default() {
        let calendar = WeekdayCalendar;
        assert!(calendar.is_valid_day(date(2020, 5, 15)).unwrap());
        assert!(!calendar.is_valid_day(date(2020, 5, 16)).unwrap());
    }

    #[test]
    fn test_calendar_through_reference_and_box() {
        let boxed: Box<dyn MarketCalendar> = Box::new(WeekdayCalendar);
        let by_ref = &boxed;

        let range = DateRange::new(date(2020, 5, 11), date(2020, 5, 17)).unwrap();
        assert_eq!(by_ref.name(), "WEEKDAYS");
        assert_eq!(by_ref.valid_days(range).unwrap().len(), 5);
        assert_eq!(boxed.schedule(range).unwrap().len(), 5);
    }
}
