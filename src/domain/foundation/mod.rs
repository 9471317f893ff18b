//! Shared value objects used across the domain.

mod period;
mod timestamp;

pub use period::{BillingPeriod, PeriodParseError};
pub use timestamp::Timestamp;
