//! Materialized trading schedule.

use std::collections::BTreeMap;

use biztime_types::{DateRange, Session};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A materialized table of trading sessions, one per trading day.
///
/// Rows are keyed by the exchange-local trading date. Session lookups
/// ([`Schedule::is_open_at`]) are half-open: `open <= instant < close`.
///
/// Serializes as a map from date to session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<NaiveDate, Session>",
    into = "BTreeMap<NaiveDate, Session>"
)]
pub struct Schedule {
    sessions: BTreeMap<NaiveDate, Session>,
    /// Sessions sorted by open time.
    by_open: Vec<Session>,
    /// `max_close[i]` is the latest close among `by_open[..=i]`.
    max_close: Vec<DateTime<Utc>>,
}

impl Schedule {
    /// Creates a schedule from `(date, session)` rows.
    ///
    /// When a date appears more than once the last row wins.
    #[must_use]
    pub fn new(rows: impl IntoIterator<Item = (NaiveDate, Session)>) -> Self {
        Self::from(rows.into_iter().collect::<BTreeMap<_, _>>())
    }

    /// Creates an empty schedule.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sessions: BTreeMap::new(),
            by_open: Vec::new(),
            max_close: Vec::new(),
        }
    }

    /// Returns the number of trading days in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if the schedule has no trading days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns the earliest trading date.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.sessions.keys().next().copied()
    }

    /// Returns the latest trading date.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.sessions.keys().next_back().copied()
    }

    /// Returns the range from the first to the last trading date.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        Some(DateRange {
            start: self.first_date()?,
            end: self.last_date()?,
        })
    }

    /// Returns true if `range` lies within the first and last trading dates.
    #[must_use]
    pub fn covers(&self, range: &DateRange) -> bool {
        self.date_range()
            .is_some_and(|own| own.start <= range.start && own.end >= range.end)
    }

    /// Returns the session for a trading date.
    #[must_use]
    pub fn session(&self, date: NaiveDate) -> Option<&Session> {
        self.sessions.get(&date)
    }

    /// Returns all `(date, session)` rows in date order.
    pub fn sessions(&self) -> impl Iterator<Item = (NaiveDate, &Session)> + '_ {
        self.sessions.iter().map(|(date, session)| (*date, session))
    }

    /// Returns all trading dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.sessions.keys().copied()
    }

    /// Returns true if `date` is a trading date of this schedule.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.sessions.contains_key(&date)
    }

    /// Returns true if the calendar date of `instant`, read in the instant's
    /// own timezone, is a trading date.
    #[must_use]
    pub fn is_business_day<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.contains_date(instant.date_naive())
    }

    /// Returns true if some session satisfies `open <= instant < close`.
    #[must_use]
    pub fn is_open_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let opened = self.by_open.partition_point(|s| s.open <= *instant);
        opened > 0 && self.max_close[opened - 1] > *instant
    }

    /// Returns the rows whose date lies in `range`.
    #[must_use]
    pub fn restrict(&self, range: &DateRange) -> Self {
        if range.start > range.end {
            return Self::empty();
        }
        Self::from(
            self.sessions
                .range(range.start..=range.end)
                .map(|(date, session)| (*date, *session))
                .collect::<BTreeMap<_, _>>(),
        )
    }
}

impl From<BTreeMap<NaiveDate, Session>> for Schedule {
    fn from(sessions: BTreeMap<NaiveDate, Session>) -> Self {
        let mut by_open: Vec<Session> = sessions.values().copied().collect();
        by_open.sort_by_key(|s| s.open);

        let max_close = by_open
            .iter()
            .scan(None, |latest: &mut Option<DateTime<Utc>>, s| {
                let close = latest.map_or(s.close, |l| l.max(s.close));
                *latest = Some(close);
                Some(close)
            })
            .collect();

        Self {
            sessions,
            by_open,
            max_close,
        }
    }
}

impl From<Schedule> for BTreeMap<NaiveDate, Session> {
    fn from(schedule: Schedule) -> Self {
        schedule.sessions
    }
}

impl FromIterator<(NaiveDate, Session)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Session)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
