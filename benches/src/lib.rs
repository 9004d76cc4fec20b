//! Benchmark fixtures for biztime.

use biztime_lib::{DateRange, MarketCalendar, Result, Schedule};
use chrono::{DateTime, TimeZone, Utc};

/// One lookback request to benchmark.
#[derive(Debug, Clone, Copy)]
pub struct BenchCase {
    /// Short label used as the benchmark id.
    pub name: &'static str,
    /// Interval text passed to the engine.
    pub interval: &'static str,
    /// Number of business intervals to walk back.
    pub target: u32,
}

/// Returns the benchmarked lookback requests, from short to year-long walks.
#[must_use]
pub const fn bench_cases() -> &'static [BenchCase] {
    &[
        BenchCase {
            name: "20-days",
            interval: "1 day",
            target: 20,
        },
        BenchCase {
            name: "250-days",
            interval: "1 day",
            target: 250,
        },
        BenchCase {
            name: "1-day-of-minutes",
            interval: "1 minute",
            target: 510,
        },
        BenchCase {
            name: "1-month-of-half-hours",
            interval: "30 minute",
            target: 17 * 21,
        },
    ]
}

/// The end timestamp every case walks back from: Sunday 17 May 2020, 23:36 UTC.
#[must_use]
pub fn bench_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 5, 17, 23, 36, 0)
        .single()
        .expect("valid benchmark end timestamp")
}

/// Materializes the fixture calendar over the whole default lookback.
///
/// # Errors
///
/// Returns an error if the calendar cannot produce the schedule.
pub fn bench_schedule(calendar: &dyn MarketCalendar) -> Result<Schedule> {
    let end = bench_end().date_naive();
    let range = DateRange::new(end - chrono::Days::new(370), end)?.widen(1);
    Ok(calendar.schedule(range)?)
}
