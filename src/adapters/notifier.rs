//! Alert notifier implementations.

use std::sync::Mutex;

use crate::domain::usage::{UsageMetricKey, UsageThreshold};
use crate::ports::AlertNotifier;

/// Notifier that drops every notification.
///
/// Default for sessions whose UI polls `active_alerts` instead of
/// reacting to the hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl AlertNotifier for NoopNotifier {
    fn alert_created(&self, _metric: UsageMetricKey, _threshold: UsageThreshold, _percentage: u32) {}
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertNotification {
    /// The metric that crossed the threshold.
    pub metric: UsageMetricKey,
    /// The crossed threshold.
    pub threshold: UsageThreshold,
    /// Usage percentage at crossing time.
    pub percentage: u32,
}

/// Notifier that records every notification for later inspection.
///
/// Test double for asserting the hook fires exactly once per created
/// alert.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<AlertNotification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in order.
    pub fn notifications(&self) -> Vec<AlertNotification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// True when nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl AlertNotifier for RecordingNotifier {
    fn alert_created(&self, metric: UsageMetricKey, threshold: UsageThreshold, percentage: u32) {
        self.notifications.lock().unwrap().push(AlertNotification {
            metric,
            threshold,
            percentage,
        });
    }
}
