use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY};
use crate::{CivilDate, ClosingDay, Month, ParseError, Year, parse_u8, parse_u16};

/// A credit-card statement cycle, identified by calendar month and year.
///
/// Which period a purchase lands in depends on the card's closing day, not
/// only on the calendar: see `current_for`. The resolved pair feeds the
/// `month`/`year` query parameters of outbound statement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillingPeriod {
    year: Year,
    month: Month,
}

/// Error type for billing-period parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Error parsing a period component.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl BillingPeriod {
    /// Creates a period from already-validated components
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Resolves which statement period is open on `today` for a card whose
    /// statement closes on `closing_day`.
    ///
    /// Purchases posted strictly after the closing day belong to the *next*
    /// statement, so the period advances by one month, with December rolling
    /// into January of the following year. The closing day itself still
    /// belongs to the current period. Without a closing day the plain
    /// calendar month is returned.
    ///
    /// Total function: no rollover is ever an error. If the next period
    /// would pass the `MAX_YEAR` limit, the current period is kept.
    pub fn current_for(today: CivilDate, closing_day: Option<ClosingDay>) -> Self {
        let period = Self {
            year: today.year_typed(),
            month: today.month_typed(),
        };
        match closing_day {
            Some(closing) if today.day() > closing.get() => period.next().unwrap_or(period),
            _ => period,
        }
    }

    /// The statement period immediately after this one.
    /// Returns `None` if it would overflow the `MAX_YEAR` limit.
    pub fn next(self) -> Option<Self> {
        if self.month() == DECEMBER {
            let year = Year::new(self.year() + 1).ok()?;
            let month = Month::new(JANUARY).ok()?;
            Some(Self { year, month })
        } else {
            let month = Month::new(self.month() + 1).ok()?;
            Some(Self {
                year: self.year,
                month,
            })
        }
    }

    /// Returns the year component as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// The pt-BR display name of this period's month ("Abril")
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Zero-padded month for outbound query strings ("04")
    pub fn month_param(&self) -> String {
        format!("{:02}", self.month())
    }

    /// Year for outbound query strings ("2025")
    pub fn year_param(&self) -> String {
        self.year().to_string()
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for BillingPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        // Same shape the Display impl produces: YYYY-MM
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 2 {
            return Err(PeriodError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Year::new(parse_u16(parts[0])?)?;
        let month = Month::new(parse_u8(parts[1])?)?;

        Ok(Self { year, month })
    }
}

impl Serialize for BillingPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BillingPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
