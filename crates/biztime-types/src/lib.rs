//! Core types for biztime business-calendar time arithmetic.
//!
//! This crate provides the value types used throughout biztime:
//!
//! - [`TimeInterval`] - A step size such as `"1 day"` or `"30 minute"`
//! - [`IntervalUnit`] - The unit of a [`TimeInterval`]
//! - [`Session`] - A trading session (open/close instants)
//! - [`DateRange`] - Inclusive range of calendar dates

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/biztime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod interval;
mod session;

pub use date_range::{DateRange, DayIterator};
pub use error::{BizTimeError, CalendarError, DateRangeError, IntervalParseError, Result};
pub use interval::{IntervalUnit, TimeInterval};
pub use session::Session;
