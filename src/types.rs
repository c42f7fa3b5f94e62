use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the pt-BR display name for this month ("Janeiro".."Dezembro")
    pub fn name(self) -> &'static str {
        month_name(self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be in the range `1..=MAX_DAY` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Only the range is validated: a day that does not exist in its month
/// (e.g. February 30) is accepted and normalized forward by the date
/// arithmetic, matching the upstream data this crate consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The day-of-month a card's statement closes, in the range `1..=MAX_DAY`.
///
/// Card records arriving from upstream APIs may carry no closing day at all,
/// or a value outside the valid range; `from_raw` absorbs both into `None`
/// so that billing-period resolution falls back to the plain calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClosingDay(NonZeroU8);

impl ClosingDay {
    /// Creates a new `ClosingDay`, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Converts a raw upstream value into a `ClosingDay`.
    /// Absent, zero, negative, and > `MAX_DAY` values all yield `None`.
    pub fn from_raw(raw: Option<i32>) -> Option<Self> {
        let value = u8::try_from(raw?).ok()?;
        Self::new(value).ok()
    }

    /// Returns the closing day as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for ClosingDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClosingDay> for u8 {
    fn from(day: ClosingDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for ClosingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns the pt-BR display name for a 1-based month number.
/// Out-of-range input yields an empty string rather than failing.
pub fn month_name(month: u8) -> &'static str {
    if (JANUARY..=MAX_MONTH).contains(&month) {
        MONTH_NAMES[usize::from(month)]
    } else {
        ""
    }
}

/// Proleptic-Gregorian day count for a civil date.
/// Linear in `day`, so a day past the end of its month counts forward into
/// the following month (February 30 lands on March 1 or 2).
/// Only differences between results are meaningful.
pub(crate) fn day_number(year: u16, month: u8, day: u8) -> i64 {
    debug_assert!((JANUARY..=MAX_MONTH).contains(&month));

    let prev = i64::from(year) - 1;
    let leap_days = prev / i64::from(LEAP_YEAR_CYCLE) - prev / i64::from(CENTURY_CYCLE)
        + prev / i64::from(GREGORIAN_CYCLE);

    let mut day_of_year = i64::from(day);
    for len in &DAYS_IN_MONTH[usize::from(JANUARY)..usize::from(month)] {
        day_of_year += i64::from(*len);
    }
    if month > FEBRUARY && is_leap_year(year) {
        day_of_year += 1;
    }

    prev * 365 + leap_days + day_of_year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2025).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_conversions_and_display() {
        let year: Year = 2025.try_into().unwrap();
        assert_eq!(year.get(), 2025);
        assert_eq!(u16::from(year), 2025);
        assert_eq!(year.to_string(), "2025");

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2025).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2025");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_name_method() {
        assert_eq!(Month::new(1).unwrap().name(), "Janeiro");
        assert_eq!(Month::new(3).unwrap().name(), "Março");
        assert_eq!(Month::new(12).unwrap().name(), "Dezembro");
    }

    #[test]
    fn test_month_conversions_and_display() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(u8::from(month), 8);
        assert_eq!(month.to_string(), "8");

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_day_range_only_validation() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(31).is_ok());
        // 30 is accepted without month context, even though February has no day 30
        assert!(Day::new(30).is_ok());

        assert!(matches!(Day::new(0), Err(ParseError::InvalidDay(0))));
        assert!(matches!(Day::new(32), Err(ParseError::InvalidDay(32))));
    }

    #[test]
    fn test_day_conversions_and_display() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);
        assert_eq!(u8::from(day), 15);
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_closing_day_new() {
        assert!(ClosingDay::new(1).is_ok());
        assert!(ClosingDay::new(31).is_ok());
        assert!(matches!(ClosingDay::new(0), Err(ParseError::InvalidDay(0))));
        assert!(matches!(ClosingDay::new(32), Err(ParseError::InvalidDay(32))));
    }

    #[test]
    fn test_closing_day_from_raw() {
        struct TestCase {
            raw: Option<i32>,
            expected: Option<u8>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                raw: Some(15),
                expected: Some(15),
                description: "mid-month closing day",
            },
            TestCase {
                raw: Some(1),
                expected: Some(1),
                description: "lower bound",
            },
            TestCase {
                raw: Some(31),
                expected: Some(31),
                description: "upper bound",
            },
            TestCase {
                raw: None,
                expected: None,
                description: "absent",
            },
            TestCase {
                raw: Some(0),
                expected: None,
                description: "zero is out of range",
            },
            TestCase {
                raw: Some(32),
                expected: None,
                description: "past upper bound",
            },
            TestCase {
                raw: Some(-3),
                expected: None,
                description: "negative",
            },
        ];

        for case in &cases {
            assert_eq!(
                ClosingDay::from_raw(case.raw).map(ClosingDay::get),
                case.expected,
                "from_raw({:?}): {}",
                case.raw,
                case.description
            );
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        // Divisible by 4
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));

        // Century years not divisible by 400
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));

        // Divisible by 400
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2025, month), 31, "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2025, month), 30, "Month {month} should have 30 days");
        }
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_month_name_lookup() {
        assert_eq!(month_name(1), "Janeiro");
        assert_eq!(month_name(2), "Fevereiro");
        assert_eq!(month_name(4), "Abril");
        assert_eq!(month_name(12), "Dezembro");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
        assert_eq!(month_name(255), "");
    }

    #[test]
    fn test_day_number_same_month() {
        assert_eq!(day_number(2025, 6, 10) - day_number(2025, 6, 1), 9);
    }

    #[test]
    fn test_day_number_across_month_boundary() {
        assert_eq!(day_number(2025, 2, 1) - day_number(2025, 1, 31), 1);
        assert_eq!(day_number(2025, 3, 1) - day_number(2025, 2, 28), 1);
    }

    #[test]
    fn test_day_number_leap_february() {
        // 2024 is a leap year: Feb 28 -> Mar 1 is two days
        assert_eq!(day_number(2024, 3, 1) - day_number(2024, 2, 28), 2);
        // 2023 is not
        assert_eq!(day_number(2023, 3, 1) - day_number(2023, 2, 28), 1);
    }

    #[test]
    fn test_day_number_across_year_boundary() {
        assert_eq!(day_number(2026, 1, 1) - day_number(2025, 12, 31), 1);
        assert_eq!(day_number(2025, 1, 1) - day_number(2024, 1, 1), 366);
        assert_eq!(day_number(2026, 1, 1) - day_number(2025, 1, 1), 365);
    }

    #[test]
    fn test_day_number_normalizes_overflow_forward() {
        // February 30 counts forward into March, like the JS Date constructor
        assert_eq!(day_number(2025, 2, 30), day_number(2025, 3, 2));
        assert_eq!(day_number(2024, 2, 30), day_number(2024, 3, 1));
        // April 31 is May 1
        assert_eq!(day_number(2025, 4, 31), day_number(2025, 5, 1));
    }
}
