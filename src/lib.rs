mod consts;
mod installment;
mod period;
mod prelude;
mod remaining;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use installment::Installment;
pub use period::{BillingPeriod, PeriodError};
pub use remaining::RemainingTime;
pub use types::{ClosingDay, Day, Month, Year, days_in_month, is_leap_year, month_name};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::day_number;

/// A date in local civil time, built from explicit year/month/day components.
/// Never constructed through timezone-sensitive timestamp parsing, so a date
/// read from an upstream `YYYY-MM-DD` string cannot drift to the previous or
/// next day across timezones.
///
/// The day component is range-checked only (`1..=31`): a combination like
/// February 30 is accepted and silently normalized forward by the arithmetic
/// (`days_until`, `RemainingTime`). `is_calendar_valid` reports whether the
/// day actually exists in its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    InvalidDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CivilDate {
    /// Creates a date from raw components, validating each range.
    ///
    /// # Errors
    /// Returns the corresponding `ParseError` variant for an out-of-range
    /// year, month, or day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day)?,
        })
    }

    /// Creates a date from already-validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Parses an optional upstream `YYYY-MM-DD` string, yielding `None` for
    /// absent or malformed input instead of an error.
    pub fn parse_opt(iso: Option<&str>) -> Option<Self> {
        iso.and_then(|s| s.parse().ok())
    }

    /// Returns the year component as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Whole-day difference from this date to `other`.
    /// Positive when `other` is later, negative when earlier.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_day_number() - self.to_day_number()
    }

    /// Whether the day component exists in this month (February 30 and
    /// April 31 pass range validation but fail this check).
    pub fn is_calendar_valid(&self) -> bool {
        self.day() <= days_in_month(self.year(), self.month())
    }

    /// Formats as `DD/MM/YYYY`, the pt-BR display shape
    pub fn format_br(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }

    pub(crate) fn to_day_number(self) -> i64 {
        day_number(self.year(), self.month(), self.day())
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strict ISO shape: YYYY-MM-DD, nothing else
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
