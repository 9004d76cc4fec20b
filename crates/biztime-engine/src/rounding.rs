//! Rounding timestamps down to interval boundaries.

use biztime_types::{IntervalUnit, TimeInterval};
use chrono::{DateTime, LocalResult, NaiveTime, Offset, TimeDelta, TimeZone};

/// Rounds `timestamp` down to the most recent boundary of `interval`.
///
/// - `day`: midnight of the same calendar date, in the timestamp's timezone.
/// - `minute` (and any other unit): the latest multiple of the interval
///   length, counted from the UNIX epoch, at or before `timestamp`, with
///   sub-second precision dropped. The grid is anchored at the epoch, not at
///   local midnight, so `"7 minute"` boundaries do not restart each day.
///
/// The result is never later than `timestamp`, and rounding twice gives the
/// same result as rounding once.
#[must_use]
pub fn round_down<Tz: TimeZone>(timestamp: &DateTime<Tz>, interval: &TimeInterval) -> DateTime<Tz> {
    match interval.unit() {
        IntervalUnit::Day => truncate_to_day(timestamp),
        _ => truncate_to_epoch_grid(timestamp, interval.seconds()),
    }
}

/// Truncates a timestamp to local midnight.
fn truncate_to_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = timestamp.date_naive().and_time(NaiveTime::MIN);
    let tz = timestamp.timezone();
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Midnight was skipped by a DST change; read it at the current offset.
        LocalResult::None => {
            let offset = TimeDelta::seconds(i64::from(timestamp.offset().fix().local_minus_utc()));
            tz.from_utc_datetime(&(midnight - offset))
        }
    }
}

/// Truncates a timestamp to a multiple of `grid_secs` since the UNIX epoch.
fn truncate_to_epoch_grid<Tz: TimeZone>(timestamp: &DateTime<Tz>, grid_secs: i64) -> DateTime<Tz> {
    let floored = timestamp.timestamp().div_euclid(grid_secs) * grid_secs;
    DateTime::from_timestamp(floored, 0).map_or_else(
        || timestamp.clone(),
        |dt| dt.with_timezone(&timestamp.timezone()),
    )
}
