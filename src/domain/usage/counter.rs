//! Per-metric monthly usage counters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::BillingPeriod;
use crate::domain::plan::PlanTier;

use super::{limits, UsageMetricKey, UsageThreshold};

/// Consumption of one metric within one billing period.
///
/// `limit` is the plan's nominal (soft) quota; `hard_limit` adds the 10%
/// overage buffer and is the absolute ceiling for increments. Both are
/// recomputed eagerly whenever the governing plan changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    /// The metric this counter tracks.
    pub metric: UsageMetricKey,
    /// The billing period this counter belongs to.
    pub period: BillingPeriod,
    /// Units consumed so far.
    pub used: u64,
    /// Soft limit from the plan.
    pub limit: u64,
    /// Hard limit: `ceil(limit * 1.1)`.
    pub hard_limit: u64,
}

impl UsageCounter {
    /// Creates a zero-usage counter scoped to a tier's limit.
    pub fn new_for(metric: UsageMetricKey, tier: PlanTier, period: BillingPeriod) -> Self {
        let limit = limits::metric_limit(tier, metric);
        Self {
            metric,
            period,
            used: 0,
            limit,
            hard_limit: limits::hard_limit(limit),
        }
    }

    /// Percentage of the soft limit consumed, rounded to the nearest
    /// integer. Defined as 0 when the limit is 0, so zero-allowance
    /// plans read 0% and never trip thresholds.
    pub fn percentage(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        ((self.used as f64 / self.limit as f64) * 100.0).round() as u32
    }

    /// The highest threshold the current percentage has reached, if any.
    pub fn threshold_status(&self) -> Option<UsageThreshold> {
        UsageThreshold::for_percentage(self.percentage())
    }

    /// Whether the soft limit is reached or exceeded.
    pub fn is_limit_reached(&self) -> bool {
        self.used >= self.limit
    }

    /// Re-derives `limit`/`hard_limit` from a tier's table, leaving
    /// `used` untouched. A lower new limit can put the counter instantly
    /// over quota; that is intentional and surfaces via
    /// [`Self::is_limit_reached`].
    pub fn apply_plan_limits(&mut self, tier: PlanTier) {
        self.limit = limits::metric_limit(tier, self.metric);
        self.hard_limit = limits::hard_limit(self.limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> BillingPeriod {
        BillingPeriod::new(2026, 8).unwrap()
    }

    fn counter(used: u64, limit: u64) -> UsageCounter {
        UsageCounter {
            metric: UsageMetricKey::MessagesSent,
            period: period(),
            used,
            limit,
            hard_limit: limits::hard_limit(limit),
        }
    }

    #[test]
    fn new_counter_starts_at_zero() {
        let c = UsageCounter::new_for(UsageMetricKey::MessagesSent, PlanTier::Starter, period());
        assert_eq!(c.used, 0);
        assert_eq!(c.limit, 1_000);
        assert_eq!(c.hard_limit, 1_100);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(counter(333, 1_000).percentage(), 33);
        assert_eq!(counter(335, 1_000).percentage(), 34); // 33.5 rounds up
        assert_eq!(counter(666, 1_000).percentage(), 67); // 66.6 rounds up
    }

    #[test]
    fn percentage_is_zero_for_zero_limit() {
        let c = counter(500, 0);
        assert_eq!(c.percentage(), 0);
        assert_eq!(c.threshold_status(), None);
    }

    #[test]
    fn percentage_can_exceed_one_hundred() {
        assert_eq!(counter(105, 100).percentage(), 105);
    }

    #[test]
    fn threshold_status_tracks_percentage() {
        assert_eq!(counter(40, 100).threshold_status(), None);
        assert_eq!(
            counter(50, 100).threshold_status(),
            Some(UsageThreshold::Info)
        );
        assert_eq!(
            counter(95, 100).threshold_status(),
            Some(UsageThreshold::Critical)
        );
        assert_eq!(
            counter(100, 100).threshold_status(),
            Some(UsageThreshold::Limit)
        );
    }

    #[test]
    fn limit_reached_at_and_beyond_soft_limit() {
        assert!(!counter(99, 100).is_limit_reached());
        assert!(counter(100, 100).is_limit_reached());
        assert!(counter(105, 100).is_limit_reached());
    }

    #[test]
    fn zero_limit_counter_is_always_at_limit() {
        assert!(counter(0, 0).is_limit_reached());
    }

    #[test]
    fn apply_plan_limits_recomputes_both_limits_preserving_used() {
        let mut c = UsageCounter::new_for(UsageMetricKey::MessagesSent, PlanTier::Starter, period());
        c.used = 950;

        c.apply_plan_limits(PlanTier::Growth);

        assert_eq!(c.used, 950);
        assert_eq!(c.limit, 10_000);
        assert_eq!(c.hard_limit, 11_000);
    }

    #[test]
    fn downgrade_can_strand_counter_over_limit() {
        let mut c = UsageCounter::new_for(UsageMetricKey::MessagesSent, PlanTier::Growth, period());
        c.used = 5_000;

        c.apply_plan_limits(PlanTier::Starter);

        assert_eq!(c.used, 5_000);
        assert_eq!(c.limit, 1_000);
        assert!(c.is_limit_reached());
    }
}
