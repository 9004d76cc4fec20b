//! Fixture calendars and test doubles for biztime.
//!
//! - [`ExchangeCalendar`] - Rule-based [`MarketCalendar`](biztime_calendar::MarketCalendar)
//! - [`HolidayRule`] / [`Observance`] - Holiday definitions
//! - [`euronext`] - The Euronext fixture calendar
//! - [`FailingCalendar`] / [`CountingCalendar`] - Test doubles

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod doubles;
mod euronext;
mod exchange;
mod holiday;

pub use doubles::{CountingCalendar, FailingCalendar};
pub use euronext::euronext;
pub use exchange::{ExchangeCalendar, ExchangeCalendarBuilder};
pub use holiday::{HolidayRule, Observance, easter_sunday};
