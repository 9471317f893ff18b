//! Usage state aggregate: counters, alerts, and the metering rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::BillingPeriod;
use crate::domain::plan::PlanTier;

use super::{UsageAlert, UsageCounter, UsageMetricKey, UsageThreshold};
use super::alert::AlertId;

/// Result of an increment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// Usage was committed; a threshold alert may have been created.
    Committed {
        /// The alert created by this increment, if any.
        alert: Option<UsageAlert>,
    },
    /// The increment would exceed the hard limit; nothing was mutated.
    RejectedHardLimit,
}

impl IncrementOutcome {
    /// True when the increment was recorded.
    pub fn is_committed(&self) -> bool {
        matches!(self, IncrementOutcome::Committed { .. })
    }
}

/// Per-period usage state for one tenant.
///
/// Counters and alerts are scoped to `current_period`; rollover to a new
/// period discards both wholesale (no archival). Sandbox handling lives
/// one layer up in the session - this aggregate always meters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageState {
    counters: Vec<UsageCounter>,
    alerts: Vec<UsageAlert>,
    current_period: BillingPeriod,
}

impl UsageState {
    /// Fresh zero-usage state for a period, with one counter per metric
    /// scoped to the tier's limits and no alerts.
    pub fn new_for(tier: PlanTier, period: BillingPeriod) -> Self {
        Self {
            counters: UsageMetricKey::ALL
                .into_iter()
                .map(|metric| UsageCounter::new_for(metric, tier, period))
                .collect(),
            alerts: Vec::new(),
            current_period: period,
        }
    }

    /// The period this state is scoped to.
    pub fn current_period(&self) -> BillingPeriod {
        self.current_period
    }

    /// All counters.
    pub fn counters(&self) -> &[UsageCounter] {
        &self.counters
    }

    /// All alerts, dismissed included.
    pub fn alerts(&self) -> &[UsageAlert] {
        &self.alerts
    }

    /// The live counter for a metric.
    ///
    /// When no counter exists yet this period, returns a freshly
    /// defaulted zero-usage counter scoped to the tier's limit - a
    /// read-only materialization, nothing is stored.
    pub fn counter(&self, metric: UsageMetricKey, tier: PlanTier) -> UsageCounter {
        self.counters
            .iter()
            .find(|c| c.metric == metric)
            .cloned()
            .unwrap_or_else(|| UsageCounter::new_for(metric, tier, self.current_period))
    }

    /// Percentage of the soft limit consumed (0 when the limit is 0).
    pub fn percentage(&self, metric: UsageMetricKey, tier: PlanTier) -> u32 {
        self.counter(metric, tier).percentage()
    }

    /// Highest threshold the metric has reached, if any.
    pub fn threshold_status(
        &self,
        metric: UsageMetricKey,
        tier: PlanTier,
    ) -> Option<UsageThreshold> {
        self.counter(metric, tier).threshold_status()
    }

    /// Advisory pre-check against the soft limit.
    ///
    /// An amount too large to even represent can never fit the limit.
    pub fn can_execute(&self, metric: UsageMetricKey, amount: u64, tier: PlanTier) -> bool {
        let counter = self.counter(metric, tier);
        match counter.used.checked_add(amount) {
            Some(total) => total <= counter.limit,
            None => false,
        }
    }

    /// Whether the soft limit is reached.
    pub fn is_limit_reached(&self, metric: UsageMetricKey, tier: PlanTier) -> bool {
        self.counter(metric, tier).is_limit_reached()
    }

    /// Records consumption against a metric.
    ///
    /// Rejects without mutation when the result would exceed the hard
    /// limit; otherwise commits and runs threshold detection. Callers
    /// that ignored a false [`Self::can_execute`] can still land here
    /// successfully until the hard limit - soft warn, hard stop.
    pub fn increment(
        &mut self,
        metric: UsageMetricKey,
        amount: u64,
        tier: PlanTier,
    ) -> IncrementOutcome {
        let period = self.current_period;
        let counter = self.ensure_counter(metric, tier, period);

        // Overflow counts as exceeding the hard limit.
        let total = match counter.used.checked_add(amount) {
            Some(total) if total <= counter.hard_limit => total,
            _ => return IncrementOutcome::RejectedHardLimit,
        };

        counter.used = total;
        let percentage = counter.percentage();
        let alert = self.detect_threshold_alert(metric, percentage);
        IncrementOutcome::Committed { alert }
    }

    /// Directly overwrites a metric's consumption.
    ///
    /// Administrative/test escape hatch: skips the hard-limit check but
    /// still runs threshold detection on the new value.
    pub fn set_used(
        &mut self,
        metric: UsageMetricKey,
        used: u64,
        tier: PlanTier,
    ) -> Option<UsageAlert> {
        let period = self.current_period;
        let counter = self.ensure_counter(metric, tier, period);
        counter.used = used;
        let percentage = counter.percentage();
        self.detect_threshold_alert(metric, percentage)
    }

    /// Resets to period defaults: zero usage on the tier's limits, all
    /// alerts cleared.
    pub fn reset(&mut self, tier: PlanTier) {
        *self = Self::new_for(tier, self.current_period);
    }

    /// Recomputes every counter's limits from a new tier, immediately.
    ///
    /// `used` is left untouched; a downgrade can strand counters over
    /// their new limit on purpose.
    pub fn apply_plan_limits(&mut self, tier: PlanTier) {
        for counter in &mut self.counters {
            counter.apply_plan_limits(tier);
        }
    }

    /// Alerts not yet dismissed.
    pub fn active_alerts(&self) -> Vec<&UsageAlert> {
        self.alerts.iter().filter(|a| !a.dismissed).collect()
    }

    /// Marks an alert dismissed. Idempotent; unknown ids are ignored.
    pub fn dismiss_alert(&mut self, id: AlertId) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.dismissed = true;
        }
    }

    fn ensure_counter(
        &mut self,
        metric: UsageMetricKey,
        tier: PlanTier,
        period: BillingPeriod,
    ) -> &mut UsageCounter {
        if let Some(idx) = self.counters.iter().position(|c| c.metric == metric) {
            return &mut self.counters[idx];
        }
        self.counters
            .push(UsageCounter::new_for(metric, tier, period));
        self.counters.last_mut().expect("counter just pushed")
    }

    /// Scans thresholds from highest to lowest and creates an alert for
    /// the first one the percentage has reached, unless one already
    /// exists for that (metric, threshold) pair this period. Dismissed
    /// alerts still suppress re-creation. At most one alert fires per
    /// detection pass, even when a single jump crosses several
    /// thresholds.
    fn detect_threshold_alert(
        &mut self,
        metric: UsageMetricKey,
        percentage: u32,
    ) -> Option<UsageAlert> {
        let threshold = UsageThreshold::for_percentage(percentage)?;

        let already_alerted = self
            .alerts
            .iter()
            .any(|a| a.metric == metric && a.threshold == threshold);
        if already_alerted {
            return None;
        }

        let alert = UsageAlert::new(metric, threshold, percentage);
        debug!(
            metric = %metric,
            threshold = ?threshold,
            percentage,
            "usage threshold alert created"
        );
        self.alerts.push(alert.clone());
        Some(alert)
    }
}
