use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::LABEL_SEPARATOR;

/// An installment position parsed from a `"<current>/<total>"` label
/// (e.g. `"3/12"` is the third of twelve installments).
///
/// Labels originate from inconsistent upstream transaction data, so parsing
/// never fails: any malformed label collapses to a usable default instead of
/// blocking display code. A missing or unparsable total yields `1/1`; an
/// unparsable current with a valid total yields `1/<total>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Installment {
    current: u32,
    total: u32,
}

impl Installment {
    /// A single, non-installment charge
    pub const SINGLE: Self = Self {
        current: 1,
        total: 1,
    };

    /// Parses an optional `"<current>/<total>"` label.
    ///
    /// Fallback policy, in order:
    /// - absent or empty label: `1/1`
    /// - no separator, or total unparsable or < 1: `1/1`
    /// - current unparsable or < 1: current defaults to 1, total is kept
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(raw) = label else {
            return Self::SINGLE;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::SINGLE;
        }

        let mut parts = raw.split(LABEL_SEPARATOR);
        let current_part = parts.next().unwrap_or("");
        let Some(total_part) = parts.next() else {
            return Self::SINGLE;
        };
        let Some(total) = parse_count(total_part) else {
            return Self::SINGLE;
        };
        let current = parse_count(current_part).unwrap_or(1);

        Self { current, total }
    }

    /// Extracts only the installment count from a label.
    ///
    /// Accepts both the `"3/12"` shape (count is the second token) and a
    /// bare `"12"` (the whole label is the count); anything else yields 1.
    pub fn total_from_label(label: Option<&str>) -> u32 {
        let Some(raw) = label else {
            return 1;
        };
        let parts: Vec<&str> = raw.trim().split(LABEL_SEPARATOR).collect();
        let token = if parts.len() == 2 { parts[1] } else { parts[0] };
        parse_count(token).unwrap_or(1)
    }

    /// Returns the 1-based position of this installment
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Returns the total number of installments
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Installments still due after the current one
    pub const fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.current)
    }
}

impl Default for Installment {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for Installment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.current, LABEL_SEPARATOR, self.total)
    }
}

impl Serialize for Installment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Installment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Defaulting decode: malformed upstream labels become 1/1
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(Some(&s)))
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
