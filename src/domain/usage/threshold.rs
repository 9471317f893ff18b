//! Usage alert thresholds.

use serde::{Deserialize, Serialize};

/// A percentage-of-limit boundary that triggers a one-time alert per
/// period.
///
/// Ordered: Info(50) < Warning(80) < Critical(90) < Limit(100).
/// Percentages are measured against the soft limit, never the hard one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsageThreshold {
    /// Halfway through the allowance.
    Info,
    /// Approaching the limit.
    Warning,
    /// Nearly exhausted.
    Critical,
    /// Soft limit reached.
    Limit,
}

impl UsageThreshold {
    /// Thresholds from highest to lowest; alert detection scans this
    /// order and stops at the first match.
    pub const DESCENDING: [UsageThreshold; 4] = [
        UsageThreshold::Limit,
        UsageThreshold::Critical,
        UsageThreshold::Warning,
        UsageThreshold::Info,
    ];

    /// The percentage of the soft limit this threshold represents.
    pub fn percent(&self) -> u32 {
        match self {
            UsageThreshold::Info => 50,
            UsageThreshold::Warning => 80,
            UsageThreshold::Critical => 90,
            UsageThreshold::Limit => 100,
        }
    }

    /// The highest threshold at or below the given percentage, or None
    /// when usage sits under Info(50).
    pub fn for_percentage(percentage: u32) -> Option<UsageThreshold> {
        Self::DESCENDING
            .into_iter()
            .find(|threshold| percentage >= threshold.percent())
    }
}
