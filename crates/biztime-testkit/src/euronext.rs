//! The Euronext fixture calendar.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Europe::Paris;

use crate::{ExchangeCalendar, HolidayRule, Observance};

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Returns the Euronext calendar used by the test-suite.
///
/// Paris time, 09:00-17:30, early close at 14:05 on Christmas Eve and
/// New Year's Eve.
#[must_use]
pub fn euronext() -> ExchangeCalendar {
    let hms = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    ExchangeCalendar::builder("Euronext", Paris)
        .session(hms(9, 0), hms(17, 30))
        .holiday(HolidayRule::fixed("New Year's Day", 1, 1).on_weekdays(&WEEKDAYS))
        .holiday(HolidayRule::easter_offset("Good Friday", -2))
        .holiday(HolidayRule::easter_offset("Easter Monday", 1))
        .holiday(HolidayRule::fixed("Early May Bank Holiday", 5, 1).on_weekdays(&WEEKDAYS))
        .holiday(HolidayRule::fixed("Christmas", 12, 25).on_weekdays(&WEEKDAYS))
        .holiday(
            HolidayRule::fixed("Weekend Christmas", 12, 27)
                .on_weekdays(&[Weekday::Mon, Weekday::Tue]),
        )
        .holiday(HolidayRule::fixed("Boxing Day", 12, 26))
        .holiday(
            HolidayRule::fixed("Weekend Boxing Day", 12, 28)
                .on_weekdays(&[Weekday::Mon, Weekday::Tue]),
        )
        .special_close(
            hms(14, 5),
            vec![
                HolidayRule::fixed("Christmas Eve", 12, 24).observed(Observance::PreviousFriday),
                HolidayRule::fixed("New Year's Eve", 12, 31).observed(Observance::PreviousFriday),
            ],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use biztime_calendar::MarketCalendar;
    use biztime_types::DateRange;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_may_day_closed() {
        let calendar = euronext();
        assert!(!calendar.is_valid_day(date(2020, 5, 1)).unwrap());
        assert!(calendar.is_valid_day(date(2020, 4, 30)).unwrap());
    }

    #[test]
    fn test_easter_2020_closed() {
        let calendar = euronext();
        assert!(!calendar.is_trading_date(date(2020, 4, 10)));
        assert!(!calendar.is_trading_date(date(2020, 4, 13)));
        assert!(calendar.is_trading_date(date(2020, 4, 14)));
    }

    #[test]
    fn test_christmas_2021() {
        // 25 Dec 2021 is a Saturday: 27th and 28th are closed.
        let calendar = euronext();
        let range = DateRange::new(date(2021, 12, 20), date(2021, 12, 31)).unwrap();
        let days = calendar.valid_days(range).unwrap();

        assert_eq!(
            days,
            vec![
                date(2021, 12, 20),
                date(2021, 12, 21),
                date(2021, 12, 22),
                date(2021, 12, 23),
                date(2021, 12, 24),
                date(2021, 12, 29),
                date(2021, 12, 30),
                date(2021, 12, 31),
            ]
        );
    }

    #[test]
    fn test_session_times() {
        let calendar = euronext();
        let schedule = calendar
            .schedule(DateRange::new(date(2020, 5, 15), date(2020, 12, 24)).unwrap())
            .unwrap();

        let summer = schedule.session(date(2020, 5, 15)).unwrap();
        assert_eq!(summer.open, Utc.with_ymd_and_hms(2020, 5, 15, 7, 0, 0).unwrap());
        assert_eq!(summer.close, Utc.with_ymd_and_hms(2020, 5, 15, 15, 30, 0).unwrap());

        let christmas_eve = schedule.session(date(2020, 12, 24)).unwrap();
        assert_eq!(christmas_eve.open, Utc.with_ymd_and_hms(2020, 12, 24, 8, 0, 0).unwrap());
        assert_eq!(christmas_eve.close, Utc.with_ymd_and_hms(2020, 12, 24, 13, 5, 0).unwrap());
    }
}
