//! Per-plan usage limits.
//!
//! Nominal (soft) monthly limits for each metric, per plan tier, plus
//! the hard-limit derivation. Free is all-zero (sandbox only);
//! Enterprise carries effectively-unbounded sentinel values.

use crate::domain::plan::PlanTier;

use super::UsageMetricKey;

/// Returns the nominal monthly limit for a metric on a tier.
pub fn metric_limit(tier: PlanTier, metric: UsageMetricKey) -> u64 {
    use UsageMetricKey::*;

    match tier {
        PlanTier::Free => 0,
        PlanTier::Starter => match metric {
            MessagesSent => 1_000,
            CallsMinutes => 100,
            AiTokens => 50_000,
            WebchatSessions => 100,
            StorageGb => 1,
            WhatsappConversations => 250,
        },
        PlanTier::Growth => match metric {
            MessagesSent => 10_000,
            CallsMinutes => 500,
            AiTokens => 250_000,
            WebchatSessions => 1_000,
            StorageGb => 10,
            WhatsappConversations => 1_000,
        },
        PlanTier::Pro => match metric {
            MessagesSent => 50_000,
            CallsMinutes => 2_000,
            AiTokens => 1_000_000,
            WebchatSessions => 5_000,
            StorageGb => 50,
            WhatsappConversations => 5_000,
        },
        PlanTier::Enterprise => match metric {
            MessagesSent => 999_999,
            CallsMinutes => 999_999,
            AiTokens => 999_999_999,
            WebchatSessions => 999_999,
            StorageGb => 999,
            WhatsappConversations => 999_999,
        },
    }
}

/// Derives the hard limit from a soft limit: `ceil(limit * 1.1)`, a 10%
/// overage buffer beyond the nominal quota.
///
/// Computed in integer arithmetic so the result is the exact
/// mathematical ceiling (float multiplication would drift on values like
/// 100 * 1.1).
pub fn hard_limit(limit: u64) -> u64 {
    (limit * 11 + 9) / 10
}
