//! Business-calendar-aware time arithmetic.
//!
//! This is a facade crate that re-exports functionality from the biztime
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use biztime_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! fn window_start(calendar: &dyn MarketCalendar) -> Result<chrono::DateTime<Utc>> {
//!     let end = Utc.with_ymd_and_hms(2020, 5, 17, 23, 36, 0).unwrap();
//!
//!     // Two trading days back from Sunday night.
//!     subtract_business_interval(&end, calendar, "1 day", 2)
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/biztime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use biztime_types::*;

// Re-export the calendar capability
pub use biztime_calendar::{MarketCalendar, Schedule, ScheduleSource};

// Re-export the engine
pub use biztime_engine::{
    DEFAULT_MAX_LOOKBACK_DAYS, ExhaustionPolicy, LookbackConfig, LookbackEngine, is_business_day,
    is_business_hour, round_down, subtract_business_interval,
};

/// Prelude module for convenient imports.
///
/// ```
/// use biztime_lib::prelude::*;
/// ```
pub mod prelude {
    pub use biztime_types::{
        BizTimeError, CalendarError, DateRange, IntervalParseError, IntervalUnit, Result, Session,
        TimeInterval,
    };

    pub use biztime_calendar::{MarketCalendar, Schedule, ScheduleSource};

    pub use biztime_engine::{
        DEFAULT_MAX_LOOKBACK_DAYS, ExhaustionPolicy, LookbackConfig, LookbackEngine,
        is_business_day, is_business_hour, round_down, subtract_business_interval,
    };
}
