//! Alert notifier port - hook for newly created usage alerts.
//!
//! The core has no opinion on message text or delivery channel; it only
//! tells an external notifier that a threshold was crossed.

use crate::domain::usage::{UsageMetricKey, UsageThreshold};

/// Observer invoked whenever a new usage alert is created.
///
/// Called at most once per (metric, threshold) pair per period -
/// suppressed duplicates never reach the notifier.
pub trait AlertNotifier: Send + Sync {
    /// A threshold was crossed and an alert was recorded.
    fn alert_created(
        &self,
        metric: UsageMetricKey,
        threshold: UsageThreshold,
        percentage: u32,
    );
}
