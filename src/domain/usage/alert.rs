//! Threshold-crossing alerts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::Timestamp;

use super::{UsageMetricKey, UsageThreshold};

/// Unique identifier for a usage alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(Uuid);

impl AlertId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-time notice that a metric crossed a threshold this period.
///
/// At most one alert ever exists per (metric, threshold) pair within a
/// period; dismissal hides an alert from the active list but keeps it
/// around so the pair stays suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageAlert {
    /// Unique alert id.
    pub id: AlertId,
    /// The metric that crossed the threshold.
    pub metric: UsageMetricKey,
    /// The threshold that was crossed.
    pub threshold: UsageThreshold,
    /// Usage percentage at the time of crossing.
    pub percentage: u32,
    /// When the crossing was detected.
    pub triggered_at: Timestamp,
    /// Whether the user dismissed the alert.
    pub dismissed: bool,
}

impl UsageAlert {
    /// Creates an undismissed alert triggered now.
    pub fn new(metric: UsageMetricKey, threshold: UsageThreshold, percentage: u32) -> Self {
        Self {
            id: AlertId::new(),
            metric,
            threshold,
            percentage,
            triggered_at: Timestamp::now(),
            dismissed: false,
        }
    }
}
