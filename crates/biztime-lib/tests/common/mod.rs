#![allow(dead_code, unreachable_pub)]

use biztime_lib::{DateRange, MarketCalendar, Schedule};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Routes engine logs through the test harness; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Sunday 17 May 2020, 23:36 UTC.
pub fn sunday_night() -> DateTime<Utc> {
    utc(2020, 5, 17, 23, 36, 0)
}

/// The Euronext schedule from May 2019 to June 2020.
pub fn euronext_schedule() -> Schedule {
    let range = DateRange::new(date(2019, 5, 1), date(2020, 6, 30)).unwrap();
    biztime_testkit::euronext().schedule(range).unwrap()
}
