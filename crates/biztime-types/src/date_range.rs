//! Date range and day iteration.

use chrono::{Days, NaiveDate};

use crate::DateRangeError;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns a copy widened by `days` on both sides, saturating at the
    /// representable date limits.
    #[must_use]
    pub fn widen(&self, days: u64) -> Self {
        let days = Days::new(days);
        Self {
            start: self.start.checked_sub_days(days).unwrap_or(NaiveDate::MIN),
            end: self.end.checked_add_days(days).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Returns an iterator over all dates in the range.
    pub fn days(&self) -> DayIterator {
        DayIterator::new(self.start, self.end)
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over all dates in a date range.
#[derive(Debug, Clone)]
pub struct DayIterator {
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl DayIterator {
    const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            current: Some(start),
            end,
        }
    }
}

impl Iterator for DayIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|d| *d <= self.end)?;
        self.current = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(current) if current <= self.end => {
                let days = (self.end - current).num_days() as usize + 1;
                (days, Some(days))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DayIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31)).unwrap();
        assert_eq!(range.start, date(2020, 1, 1));
        assert_eq!(range.end, date(2020, 1, 31));
        assert_eq!(range.total_days(), 31);
    }

    #[test]
    fn test_date_range_invalid() {
        let err = DateRange::new(date(2020, 1, 31), date(2020, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            DateRangeError::InvalidRange {
                start: date(2020, 1, 31),
                end: date(2020, 1, 1),
            }
        );
    }

    #[test]
    fn test_day_iterator() {
        let range = DateRange::new(date(2020, 2, 27), date(2020, 3, 2)).unwrap();
        let days: Vec<_> = range.days().collect();

        assert_eq!(range.days().len(), 5);
        assert_eq!(days.len(), 5);
        assert_eq!(days[2].day(), 29); // leap year
        assert_eq!(days[4], date(2020, 3, 2));
    }

    #[test]
    fn test_single_day_iterator() {
        let range = DateRange::single_day(date(2020, 5, 1));
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2020, 5, 1)]);
    }

    #[test]
    fn test_widen() {
        let range = DateRange::single_day(date(2020, 1, 1)).widen(1);
        assert_eq!(range.start, date(2019, 12, 31));
        assert_eq!(range.end, date(2020, 1, 2));
        assert!(range.contains(date(2020, 1, 1)));
        assert!(!range.contains(date(2020, 1, 3)));
    }
}
