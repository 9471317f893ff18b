//! Billing period value object (calendar month, `YYYY-MM`).

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A calendar-month billing period.
///
/// Usage counters and alerts are scoped to one period; when the stored
/// period no longer matches [`BillingPeriod::current`], the whole usage
/// state is discarded and reinitialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Creates a period for the given year and month.
    ///
    /// Returns an error if the month is outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the period containing the given timestamp.
    pub fn containing(ts: &Timestamp) -> Self {
        let dt = ts.as_datetime();
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// Returns the current calendar period (UTC).
    pub fn current() -> Self {
        Self::containing(&Timestamp::now())
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<BillingPeriod> for String {
    fn from(period: BillingPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for BillingPeriod {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for BillingPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::Malformed(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::Malformed(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::Malformed(s.to_string()))?;
        Self::new(year, month)
    }
}

/// Errors from parsing a `YYYY-MM` period tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("malformed billing period: {0}")]
    Malformed(String),

    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),
}
