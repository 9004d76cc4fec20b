//! Rule-based exchange calendar.

use biztime_calendar::{MarketCalendar, Schedule};
use biztime_types::{CalendarError, DateRange, Session};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::HolidayRule;

/// An exchange calendar built from a weekday mask, holiday rules and one
/// regular session per trading day, in the exchange's local timezone.
#[derive(Debug, Clone)]
pub struct ExchangeCalendar {
    name: String,
    tz: Tz,
    open: NaiveTime,
    close: NaiveTime,
    weekmask: Vec<Weekday>,
    holidays: Vec<HolidayRule>,
    special_closes: Vec<(NaiveTime, Vec<HolidayRule>)>,
}

impl ExchangeCalendar {
    /// Starts building a calendar trading Monday to Friday, 09:00-17:00 local.
    #[must_use]
    pub fn builder(name: impl Into<String>, tz: Tz) -> ExchangeCalendarBuilder {
        ExchangeCalendarBuilder {
            calendar: Self {
                name: name.into(),
                tz,
                open: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                close: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                weekmask: vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ],
                holidays: Vec::new(),
                special_closes: Vec::new(),
            },
        }
    }

    /// Returns true if `date` is on the weekmask and not a holiday.
    #[must_use]
    pub fn is_trading_date(&self, date: NaiveDate) -> bool {
        self.weekmask.contains(&date.weekday()) && !self.holidays.iter().any(|h| h.matches(date))
    }

    /// Returns the local closing time for a trading date.
    #[must_use]
    pub fn close_time(&self, date: NaiveDate) -> NaiveTime {
        self.special_closes
            .iter()
            .find(|(_, rules)| rules.iter().any(|r| r.matches(date)))
            .map_or(self.close, |(time, _)| *time)
    }

    fn to_utc(&self, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, CalendarError> {
        self.tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                CalendarError::Other(format!("{date} {time} does not exist in {}", self.tz).into())
            })
    }
}

impl MarketCalendar for ExchangeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn valid_days(&self, range: DateRange) -> Result<Vec<NaiveDate>, CalendarError> {
        Ok(range.days().filter(|d| self.is_trading_date(*d)).collect())
    }

    fn schedule(&self, range: DateRange) -> Result<Schedule, CalendarError> {
        self.valid_days(range)?
            .into_iter()
            .map(|date| {
                let open = self.to_utc(date, self.open)?;
                let close = self.to_utc(date, self.close_time(date))?;
                Ok((date, Session::new(open, close)))
            })
            .collect()
    }
}

/// Builder for [`ExchangeCalendar`].
#[derive(Debug, Clone)]
pub struct ExchangeCalendarBuilder {
    calendar: ExchangeCalendar,
}

impl ExchangeCalendarBuilder {
    /// Sets the regular local session times.
    #[must_use]
    pub fn session(mut self, open: NaiveTime, close: NaiveTime) -> Self {
        self.calendar.open = open;
        self.calendar.close = close;
        self
    }

    /// Sets the trading weekdays.
    #[must_use]
    pub fn weekmask(mut self, days: &[Weekday]) -> Self {
        self.calendar.weekmask = days.to_vec();
        self
    }

    /// Adds a regular holiday.
    #[must_use]
    pub fn holiday(mut self, rule: HolidayRule) -> Self {
        self.calendar.holidays.push(rule);
        self
    }

    /// Adds an early close at `time` on the days matched by `rules`.
    #[must_use]
    pub fn special_close(mut self, time: NaiveTime, rules: Vec<HolidayRule>) -> Self {
        self.calendar.special_closes.push((time, rules));
        self
    }

    /// Finishes the calendar.
    #[must_use]
    pub fn build(self) -> ExchangeCalendar {
        self.calendar
    }
}
