use crate::CivilDate;
use crate::types::day_number;

/// Time left until a deadline, decomposed for display as whole months plus
/// a day count.
///
/// This is a lossy, display-oriented decomposition, not a full calendar
/// duration: `days` is only populated once the remaining time has collapsed
/// into the final month (`months == 0`), so "9 meses" never turns into the
/// noisier "9 meses e 17 dias". A deadline that is today or already past
/// yields zero, never negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RemainingTime {
    months: u32,
    days: u32,
}

impl RemainingTime {
    /// Nothing left: the deadline is today or has passed
    pub const ZERO: Self = Self { months: 0, days: 0 };

    /// Creates a value directly, for pre-computed month/day figures
    pub const fn new(months: u32, days: u32) -> Self {
        Self { months, days }
    }

    /// Computes the time remaining from `today` until `deadline`.
    ///
    /// The whole-month difference is corrected downward when today's
    /// day-of-month has not yet been reached within the deadline's month;
    /// the candidate date used for that check normalizes overflowing days
    /// forward (a 31st carried into a 30-day month counts as the following
    /// month's 1st).
    pub fn until(today: CivilDate, deadline: CivilDate) -> Self {
        let total_days = today.days_until(deadline);
        if total_days <= 0 {
            return Self::ZERO;
        }

        let mut months = (i64::from(deadline.year()) - i64::from(today.year())) * 12
            + i64::from(deadline.month())
            - i64::from(today.month());

        // Today's day-of-month carried into the deadline's month
        let candidate = day_number(deadline.year(), deadline.month(), today.day());
        if candidate > deadline.to_day_number() {
            months -= 1;
        }
        if months < 0 {
            months = 0;
        }

        let days = if months == 0 {
            u32::try_from(total_days).unwrap_or(0)
        } else {
            0
        };
        let months = u32::try_from(months).unwrap_or(0);

        Self { months, days }
    }

    /// Whole months remaining
    pub const fn months(&self) -> u32 {
        self.months
    }

    /// Days remaining; non-zero only when `months` is zero
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Whether the deadline is today or has already passed
    pub const fn is_elapsed(&self) -> bool {
        self.months == 0 && self.days == 0
    }

    /// pt-BR display label ("Faltam 2 meses", "Faltam 9 dias"), or `None`
    /// when nothing remains. Handles the combined months-and-days shape for
    /// values built with `new`, even though `until` never produces it.
    pub fn label(&self) -> Option<String> {
        if self.is_elapsed() {
            return None;
        }

        let months = pluralize(self.months, "mês", "meses");
        let days = pluralize(self.days, "dia", "dias");

        Some(match (self.months, self.days) {
            (_, 0) => format!("Faltam {months}"),
            (0, _) => format!("Faltam {days}"),
            _ => format!("Faltam {months} e {days}"),
        })
    }
}

fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
