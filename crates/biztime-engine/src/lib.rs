//! Business-interval subtraction over market calendars.
//!
//! - [`round_down`] - Floors a timestamp to a day or minute-grid boundary
//! - [`is_business_day`] / [`is_business_hour`] - Calendar membership tests
//! - [`LookbackEngine`] - The backward walk, configured by [`LookbackConfig`]
//! - [`subtract_business_interval`] - The walk with default configuration

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/biztime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod predicates;
mod rounding;

pub use config::{DEFAULT_MAX_LOOKBACK_DAYS, ExhaustionPolicy, LookbackConfig};
pub use engine::{LookbackEngine, subtract_business_interval};
pub use predicates::{is_business_day, is_business_hour};
pub use rounding::round_down;
