//! Usage metering domain module.
//!
//! Tracks per-metric monthly consumption against plan limits, enforces
//! the hard cap, and emits threshold-crossing alerts exactly once per
//! threshold per period.
//!
//! # Module Structure
//!
//! - `metric` - the closed UsageMetricKey set
//! - `limits` - per-tier limits and the hard-limit derivation
//! - `threshold` - the Info/Warning/Critical/Limit ladder
//! - `counter` - UsageCounter per metric per period
//! - `alert` - UsageAlert and AlertId
//! - `state` - the UsageState aggregate and metering rules

mod alert;
mod counter;
pub mod limits;
mod metric;
mod state;
mod threshold;

pub use alert::{AlertId, UsageAlert};
pub use counter::UsageCounter;
pub use metric::{UnknownMetricKey, UsageMetricKey};
pub use state::{IncrementOutcome, UsageState};
pub use threshold::UsageThreshold;
