//! Business calendar capability and schedule tables for biztime.
//!
//! - [`MarketCalendar`] - Live calendar queried for trading days and sessions
//! - [`Schedule`] - Materialized table of trading sessions keyed by date
//! - [`ScheduleSource`] - Either of the above

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/biztime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calendar;
mod schedule;
mod source;

pub use calendar::MarketCalendar;
pub use schedule::Schedule;
pub use source::ScheduleSource;
