mod common;

use biztime_lib::prelude::*;
use biztime_testkit::euronext;
use common::{date, euronext_schedule, utc};

#[test]
fn may_day_is_not_a_business_day() {
    let calendar = euronext();
    let live = ScheduleSource::live(&calendar);
    let schedule = euronext_schedule();
    let table = ScheduleSource::materialized(&schedule);

    for source in [live, table] {
        assert!(!is_business_day(&utc(2020, 5, 1, 12, 0, 0), source).unwrap());
        assert!(is_business_day(&utc(2020, 4, 30, 12, 0, 0), source).unwrap());
    }
}

#[test]
fn business_hours_from_live_calendar() {
    let calendar = euronext();
    let source = ScheduleSource::live(&calendar);

    assert!(!is_business_hour(&utc(2020, 4, 30, 1, 30, 33), source).unwrap());
    assert!(is_business_hour(&utc(2020, 4, 30, 15, 30, 0), source).unwrap());
}

#[test]
fn session_close_differs_between_sources() {
    let calendar = euronext();
    let schedule = euronext_schedule();
    let close = utc(2020, 4, 30, 15, 30, 0);

    assert!(is_business_hour(&close, ScheduleSource::live(&calendar)).unwrap());
    assert!(!is_business_hour(&close, ScheduleSource::materialized(&schedule)).unwrap());
    assert!(
        is_business_hour(
            &utc(2020, 4, 30, 15, 0, 0),
            ScheduleSource::materialized(&schedule)
        )
        .unwrap()
    );
}

#[test]
fn early_close_on_christmas_eve() {
    let calendar = euronext();
    let range = DateRange::new(date(2019, 12, 23), date(2019, 12, 24)).unwrap();
    let schedule = calendar.schedule(range).unwrap();
    let source = ScheduleSource::materialized(&schedule);

    assert!(is_business_hour(&utc(2019, 12, 24, 13, 0, 0), source).unwrap());
    assert!(!is_business_hour(&utc(2019, 12, 24, 13, 5, 0), source).unwrap());
    assert!(is_business_hour(&utc(2019, 12, 23, 16, 0, 0), source).unwrap());
}

#[test]
fn schedule_round_trips_through_json() {
    let range = DateRange::new(date(2020, 4, 27), date(2020, 5, 8)).unwrap();
    let schedule = euronext_schedule().restrict(&range);
    assert_eq!(schedule.len(), 9);

    let json = serde_json::to_string(&schedule).unwrap();
    let back: Schedule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schedule);
    assert!(!back.is_business_day(&utc(2020, 5, 1, 9, 0, 0)));
}
