//! Interval definitions for the business-interval walk.

use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::IntervalParseError;

/// Unit of a [`TimeInterval`].
///
/// New units may be added; consumers must handle units they do not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum IntervalUnit {
    /// Calendar days.
    Day,
    /// Minutes.
    Minute,
}

impl IntervalUnit {
    /// Returns the unit as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Minute => "minute",
        }
    }

    /// Returns the length of one unit in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        match self {
            Self::Day => 86_400,
            Self::Minute => 60,
        }
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IntervalUnit {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.to_lowercase();
        match unit.as_str() {
            "day" => Ok(Self::Day),
            "minute" => Ok(Self::Minute),
            _ => Err(IntervalParseError::UnrecognizedUnit { unit }),
        }
    }
}

/// A step size for the business-interval walk, e.g. `"1 day"` or `"30 minute"`.
///
/// Parsed from `"<magnitude> <unit>"`: exactly two whitespace-separated
/// tokens, a positive integer magnitude and a case-insensitive unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    unit: IntervalUnit,
    magnitude: NonZeroU32,
}

impl TimeInterval {
    /// Creates an interval from an already validated unit and magnitude.
    #[must_use]
    pub const fn new(unit: IntervalUnit, magnitude: NonZeroU32) -> Self {
        Self { unit, magnitude }
    }

    /// Parses an interval such as `"2 day"` or `"15 Minute"`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalParseError::Malformed`] if the text does not split into
    /// exactly two tokens or the magnitude is not a positive integer, and
    /// [`IntervalParseError::UnrecognizedUnit`] if the unit is not `day` or `minute`.
    pub fn parse(text: &str) -> Result<Self, IntervalParseError> {
        text.parse()
    }

    /// Returns the interval unit.
    #[must_use]
    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Returns the number of units in one step.
    #[must_use]
    pub const fn magnitude(&self) -> u32 {
        self.magnitude.get()
    }

    /// Returns the step length in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.unit.seconds() * self.magnitude.get() as i64
    }

    /// Returns the step length as a [`TimeDelta`].
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::seconds(self.seconds())
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

impl FromStr for TimeInterval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || IntervalParseError::Malformed {
            input: s.to_string(),
        };

        let mut tokens = s.split_whitespace();
        let (Some(magnitude), Some(unit), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(malformed());
        };

        let magnitude = magnitude
            .parse::<NonZeroU32>()
            .map_err(|_| malformed())?;
        let unit = unit.parse::<IntervalUnit>()?;

        Ok(Self { unit, magnitude })
    }
}

impl Serialize for TimeInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
