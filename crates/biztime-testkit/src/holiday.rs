//! Holiday rules.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How a holiday that falls on a weekend is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observance {
    /// The holiday stays on its nominal date.
    #[default]
    Nominal,
    /// Saturday and Sunday move to the preceding Friday.
    PreviousFriday,
    /// Saturday and Sunday move to the following Monday.
    NextMonday,
    /// Saturday moves to Friday, Sunday moves to Monday.
    NearestWorkday,
}

impl Observance {
    /// Applies the observance to a nominal holiday date.
    #[must_use]
    pub fn apply(&self, date: NaiveDate) -> NaiveDate {
        let shift = match (self, date.weekday()) {
            (Self::PreviousFriday, Weekday::Sat) | (Self::NearestWorkday, Weekday::Sat) => -1,
            (Self::PreviousFriday, Weekday::Sun) => -2,
            (Self::NextMonday, Weekday::Sat) => 2,
            (Self::NextMonday, Weekday::Sun) | (Self::NearestWorkday, Weekday::Sun) => 1,
            _ => 0,
        };
        shift_days(date, shift)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum RuleDate {
    Fixed { month: u32, day: u32 },
    EasterOffset(i64),
}

/// A recurring holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    name: String,
    date: RuleDate,
    observance: Observance,
    days_of_week: Option<Vec<Weekday>>,
}

impl HolidayRule {
    /// A holiday on the same month and day every year.
    #[must_use]
    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            name: name.into(),
            date: RuleDate::Fixed { month, day },
            observance: Observance::Nominal,
            days_of_week: None,
        }
    }

    /// A holiday `offset` days from Easter Sunday (Good Friday is `-2`).
    #[must_use]
    pub fn easter_offset(name: impl Into<String>, offset: i64) -> Self {
        Self {
            name: name.into(),
            date: RuleDate::EasterOffset(offset),
            observance: Observance::Nominal,
            days_of_week: None,
        }
    }

    /// Sets how the holiday moves when it falls on a weekend.
    #[must_use]
    pub fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// Keeps the holiday only in years where its observed date falls on one of `days`.
    #[must_use]
    pub fn on_weekdays(mut self, days: &[Weekday]) -> Self {
        self.days_of_week = Some(days.to_vec());
        self
    }

    /// Returns the holiday name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the observed date of the holiday in `year`, if it is held that year.
    #[must_use]
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        let nominal = match self.date {
            RuleDate::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day)?,
            RuleDate::EasterOffset(offset) => shift_days(easter_sunday(year)?, offset),
        };
        let observed = self.observance.apply(nominal);

        match &self.days_of_week {
            Some(days) if !days.contains(&observed.weekday()) => None,
            _ => Some(observed),
        }
    }

    /// Returns true if `date` is an observed occurrence of this holiday.
    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> bool {
        // Observance can move a holiday across a year boundary.
        let year = date.year();
        (year - 1..=year + 1).any(|y| self.date_in(y) == Some(date))
    }
}

/// Returns Easter Sunday of `year` in the Gregorian calendar.
#[must_use]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
