//! The backward business-interval walk.

use biztime_calendar::{MarketCalendar, Schedule, ScheduleSource};
use biztime_types::{BizTimeError, DateRange, IntervalUnit, Result, TimeInterval};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tracing::{debug, trace, warn};

use crate::{ExhaustionPolicy, LookbackConfig, round_down};

/// How the cursor is placed and tested for one interval unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Day,
    Minute,
}

impl Walk {
    fn for_unit(unit: IntervalUnit) -> Result<Self> {
        match unit {
            IntervalUnit::Day => Ok(Self::Day),
            IntervalUnit::Minute => Ok(Self::Minute),
            other => Err(BizTimeError::UnsupportedUnit(other)),
        }
    }

    /// Places the rounded end on the UTC timeline.
    ///
    /// Day cursors keep the local midnight's wall-clock reading and relabel it
    /// as UTC, so each step lands on the exchange date it stands for.
    fn cursor<Tz: TimeZone>(self, rounded: &DateTime<Tz>) -> DateTime<Utc> {
        match self {
            Self::Day => Utc.from_utc_datetime(&rounded.naive_local()),
            Self::Minute => rounded.with_timezone(&Utc),
        }
    }

    fn counts<Tz: TimeZone>(self, schedule: &Schedule, instant: &DateTime<Tz>) -> bool {
        match self {
            Self::Day => schedule.is_business_day(instant),
            Self::Minute => schedule.is_open_at(instant),
        }
    }
}

/// Walks backwards from an end timestamp until enough business intervals
/// are covered.
///
/// # Example
///
/// ```ignore
/// use biztime_engine::{LookbackConfig, LookbackEngine};
/// use biztime_calendar::ScheduleSource;
///
/// let engine = LookbackEngine::new(LookbackConfig::default().with_max_lookback_days(30));
/// let start = engine.subtract(&end, ScheduleSource::live(&calendar), "30 minute", 48)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookbackEngine {
    config: LookbackConfig,
}

impl LookbackEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: LookbackConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LookbackConfig::default())
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &LookbackConfig {
        &self.config
    }

    /// Parses `interval` and walks back `target_count` business intervals
    /// from `end`.
    ///
    /// # Errors
    ///
    /// See [`LookbackEngine::subtract_interval`]; additionally returns
    /// [`BizTimeError::Interval`] if `interval` does not parse. Parsing
    /// happens before any calendar query.
    pub fn subtract<Tz: TimeZone>(
        &self,
        end: &DateTime<Tz>,
        source: ScheduleSource<'_>,
        interval: &str,
        target_count: u32,
    ) -> Result<DateTime<Utc>> {
        let interval = TimeInterval::parse(interval)?;
        self.subtract_interval(end, source, &interval, target_count)
    }

    /// Walks back `target_count` business intervals from `end`.
    ///
    /// The cursor starts at `end` rounded down to the interval and normalized
    /// to UTC. If `end` lies strictly after that boundary and is itself a
    /// business instant, the partial trailing interval counts as one. The
    /// cursor then steps back one interval at a time, counting steps that land
    /// on a business day (`day`) or inside a session (`minute`), until the
    /// target is met or the cursor is at or before the lookback floor.
    ///
    /// The schedule is materialized once for the whole walk. A zero target
    /// returns the rounded end.
    ///
    /// # Errors
    ///
    /// - [`BizTimeError::UnsupportedUnit`] if the walk has no step for the unit.
    /// - [`BizTimeError::Calendar`] if the schedule fetch fails.
    /// - [`BizTimeError::InsufficientHistory`] if the floor is reached first and
    ///   the policy is [`ExhaustionPolicy::Error`].
    pub fn subtract_interval<Tz: TimeZone>(
        &self,
        end: &DateTime<Tz>,
        source: ScheduleSource<'_>,
        interval: &TimeInterval,
        target_count: u32,
    ) -> Result<DateTime<Utc>> {
        let walk = Walk::for_unit(interval.unit())?;
        let end_utc = end.with_timezone(&Utc);
        let floor = end_utc
            .checked_sub_signed(TimeDelta::days(i64::from(self.config.max_lookback_days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let end_date = end.date_naive();
        let walked = DateRange::new(
            floor.date_naive().min(end_date),
            end_date.max(end_utc.date_naive()),
        )?;
        let range = walked.widen(1);
        let schedule = source.materialize(range)?;
        debug!(
            source = ?source,
            range = %range,
            sessions = schedule.len(),
            "Fetched schedule for lookback"
        );
        if !source.is_live() && !schedule.covers(&walked) {
            warn!(
                walked = %walked,
                covered = ?schedule.date_range(),
                "Materialized schedule does not cover the lookback range"
            );
        }

        let rounded = round_down(end, interval);
        let mut cursor = walk.cursor(&rounded);
        if target_count == 0 {
            return Ok(cursor);
        }

        let partial = *end > rounded && walk.counts(&schedule, end);
        trace!(end = ?end, cursor = %cursor, partial, "Checked trailing interval");

        let step = interval.duration();
        let mut satisfied = u32::from(partial);
        let mut steps = 0u64;
        while satisfied < target_count && cursor > floor {
            let Some(previous) = cursor.checked_sub_signed(step) else {
                break;
            };
            cursor = previous;
            steps += 1;
            if walk.counts(&schedule, &cursor) {
                satisfied += 1;
            }
        }

        if satisfied < target_count {
            warn!(
                target = target_count,
                satisfied,
                floor = %floor,
                cursor = %cursor,
                "Lookback floor reached before target count"
            );
            if self.config.on_exhausted == ExhaustionPolicy::Error {
                return Err(BizTimeError::InsufficientHistory {
                    target: target_count,
                    satisfied,
                    floor,
                });
            }
        }

        debug!(
            interval = %interval,
            target = target_count,
            satisfied,
            steps,
            start = %cursor,
            "Lookback complete"
        );
        Ok(cursor)
    }
}

/// Walks back `target_count` business intervals from `end` against a live
/// calendar, with the default configuration.
///
/// # Errors
///
/// See [`LookbackEngine::subtract`].
pub fn subtract_business_interval<Tz: TimeZone>(
    end: &DateTime<Tz>,
    calendar: &dyn MarketCalendar,
    interval: &str,
    target_count: u32,
) -> Result<DateTime<Utc>> {
    LookbackEngine::with_defaults().subtract(
        end,
        ScheduleSource::live(calendar),
        interval,
        target_count,
    )
}
