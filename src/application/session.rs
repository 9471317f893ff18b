//! Tenant session: the single entry point collaborators call.
//!
//! Owns the plan and usage state for one tenant, loads them from a
//! `StateStore` on open (handling period rollover and corrupt-snapshot
//! recovery), and persists the full snapshot after every mutation.
//! There is no process-wide singleton: the caller constructs and owns
//! the session.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::adapters::NoopNotifier;
use crate::domain::foundation::{BillingPeriod, Timestamp};
use crate::domain::plan::{
    catalog, EntitlementValue, FeatureKey, PlanInfo, PlanState, PlanTier, TenantOverride,
    TenantStatus,
};
use crate::domain::usage::{
    AlertId, IncrementOutcome, UsageAlert, UsageCounter, UsageMetricKey, UsageState,
    UsageThreshold,
};
use crate::ports::{AlertNotifier, StateSnapshot, StateStore};

/// Everything a UI needs to render one feature gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGate {
    /// Whether the tenant may use the feature right now.
    pub is_enabled: bool,
    /// The lowest plan that would unlock the feature, ignoring
    /// overrides. None = no plan grants it.
    pub required_plan: Option<PlanTier>,
    /// The tenant's current plan.
    pub current_plan: PlanTier,
    /// Whether the tenant is sandboxed.
    pub is_sandbox_mode: bool,
}

/// Everything a UI needs to render one usage meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageMeterReading {
    /// The live counter.
    pub counter: UsageCounter,
    /// Percentage of the soft limit consumed.
    pub percentage: u32,
    /// Highest threshold reached, if any.
    pub threshold: Option<UsageThreshold>,
}

/// A tenant-scoped session over the entitlement and metering core.
///
/// All reads reflect the most recently committed write from this
/// session. Business outcomes (locked feature, exceeded quota) are
/// regular return values; a failing save is logged and never surfaced
/// as an error - the in-memory state stands and the next successful
/// save rewrites the full snapshot.
pub struct TenantSession<S: StateStore> {
    store: S,
    notifier: Arc<dyn AlertNotifier>,
    plan: PlanState,
    usage: UsageState,
}

impl<S: StateStore> TenantSession<S> {
    /// Opens a session, loading state from the store.
    ///
    /// - No snapshot: bootstraps a fresh trial tenant (Free plan, zero
    ///   usage).
    /// - Snapshot from a prior billing period: keeps the plan state,
    ///   discards all counters and alerts, and reinitializes usage at
    ///   zero on the current plan's limits.
    /// - Unreadable snapshot: logs a warning and reinitializes to
    ///   defaults rather than failing the session.
    pub fn open(store: S) -> Self {
        Self::open_with_notifier(store, Arc::new(NoopNotifier))
    }

    /// Opens a session with an external alert notifier.
    pub fn open_with_notifier(store: S, notifier: Arc<dyn AlertNotifier>) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to load tenant snapshot, reinitializing to defaults");
                None
            }
        };

        let current = BillingPeriod::current();
        let (plan, usage) = match snapshot {
            Some(snapshot) => {
                let plan = snapshot.plan;
                let usage = if snapshot.usage.current_period() == current {
                    snapshot.usage
                } else {
                    info!(
                        stored = %snapshot.usage.current_period(),
                        current = %current,
                        "billing period rolled over, resetting usage counters"
                    );
                    UsageState::new_for(plan.current_plan(), current)
                };
                (plan, usage)
            }
            None => (
                PlanState::new_trial(Timestamp::now()),
                UsageState::new_for(PlanTier::Free, current),
            ),
        };

        Self {
            store,
            notifier,
            plan,
            usage,
        }
    }

    // ---- Plan / entitlement reads ----

    /// The tenant's current plan tier.
    pub fn current_plan(&self) -> PlanTier {
        self.plan.current_plan()
    }

    /// The tenant's account status.
    pub fn tenant_status(&self) -> TenantStatus {
        self.plan.tenant_status()
    }

    /// When the trial ends, if the tenant is on one.
    pub fn trial_ends_at(&self) -> Option<Timestamp> {
        self.plan.trial_ends_at().copied()
    }

    /// All stored overrides, expired ones included.
    pub fn overrides(&self) -> &[TenantOverride] {
        self.plan.overrides()
    }

    /// The billing period the session is metering.
    pub fn current_period(&self) -> BillingPeriod {
        self.usage.current_period()
    }

    /// Resolves the entitlement value for a feature:
    /// unexpired override, then plan table, then default-deny.
    pub fn entitlement_value(&self, feature: FeatureKey) -> EntitlementValue {
        self.plan.entitlement_value(feature, &Timestamp::now())
    }

    /// Whether the tenant may use a feature.
    pub fn is_entitled(&self, feature: FeatureKey) -> bool {
        self.plan.is_entitled(feature, &Timestamp::now())
    }

    /// The lowest plan that would unlock a feature, ignoring overrides.
    pub fn required_plan_for(&self, feature: FeatureKey) -> Option<PlanTier> {
        catalog::required_plan_for(feature)
    }

    /// Catalog metadata for a tier.
    pub fn plan_info(&self, tier: PlanTier) -> PlanInfo {
        tier.info()
    }

    /// Whether the tenant operates in live mode.
    pub fn is_live_mode(&self) -> bool {
        self.plan.is_live_mode(&Timestamp::now())
    }

    /// Whether the tenant operates in sandbox mode.
    pub fn is_sandbox_mode(&self) -> bool {
        self.plan.is_sandbox_mode(&Timestamp::now())
    }

    /// Whether the tenant is on an unexpired trial.
    pub fn is_trial_active(&self) -> bool {
        self.plan.is_trial_active(&Timestamp::now())
    }

    /// Gate summary for one feature.
    pub fn feature_gate(&self, feature: FeatureKey) -> FeatureGate {
        FeatureGate {
            is_enabled: self.is_entitled(feature),
            required_plan: self.required_plan_for(feature),
            current_plan: self.current_plan(),
            is_sandbox_mode: self.is_sandbox_mode(),
        }
    }

    // ---- Plan / entitlement writes ----

    /// Switches the tenant to a new plan and immediately recomputes
    /// every usage counter's limits from the new tier (`used` is left
    /// untouched, so a downgrade can strand counters over quota).
    pub fn upgrade_plan(&mut self, new_plan: PlanTier) {
        info!(from = %self.plan.current_plan(), to = %new_plan, "tenant plan changed");
        self.plan.upgrade_plan(new_plan);
        self.usage.apply_plan_limits(new_plan);
        self.persist();
    }

    /// Sets an entitlement override, replacing any existing one for the
    /// same feature.
    pub fn set_override(
        &mut self,
        feature: FeatureKey,
        value: impl Into<EntitlementValue>,
        expires_at: Option<Timestamp>,
    ) {
        self.plan.set_override(feature, value, expires_at);
        self.persist();
    }

    // ---- Usage reads ----

    /// The live counter for a metric (materialized at zero if absent).
    pub fn usage(&self, metric: UsageMetricKey) -> UsageCounter {
        self.usage.counter(metric, self.plan.current_plan())
    }

    /// Percentage of the soft limit consumed; 0 when the limit is 0.
    pub fn usage_percentage(&self, metric: UsageMetricKey) -> u32 {
        self.usage.percentage(metric, self.plan.current_plan())
    }

    /// Highest threshold the metric has reached, if any.
    pub fn threshold_status(&self, metric: UsageMetricKey) -> Option<UsageThreshold> {
        self.usage.threshold_status(metric, self.plan.current_plan())
    }

    /// Advisory pre-check: may `amount` more units be consumed?
    ///
    /// Always true in sandbox mode - simulated actions never consume
    /// quota. Outside sandbox, checks against the soft limit.
    pub fn can_execute(&self, metric: UsageMetricKey, amount: u64) -> bool {
        if self.is_sandbox_mode() {
            return true;
        }
        self.usage
            .can_execute(metric, amount, self.plan.current_plan())
    }

    /// Whether the soft limit is reached.
    pub fn is_limit_reached(&self, metric: UsageMetricKey) -> bool {
        self.usage
            .is_limit_reached(metric, self.plan.current_plan())
    }

    /// Meter summary for one metric.
    pub fn usage_meter(&self, metric: UsageMetricKey) -> UsageMeterReading {
        UsageMeterReading {
            counter: self.usage(metric),
            percentage: self.usage_percentage(metric),
            threshold: self.threshold_status(metric),
        }
    }

    /// Alerts not yet dismissed.
    pub fn active_alerts(&self) -> Vec<UsageAlert> {
        self.usage.active_alerts().into_iter().cloned().collect()
    }

    // ---- Usage writes ----

    /// Records consumption against a metric.
    ///
    /// In sandbox mode this is a no-op returning true: usage is never
    /// recorded. Outside sandbox, the increment commits unless it would
    /// exceed the hard limit (returns false, nothing mutated). A caller
    /// that ignored a false [`Self::can_execute`] can therefore still
    /// succeed until the hard limit - soft warn, hard stop.
    pub fn increment_usage(&mut self, metric: UsageMetricKey, amount: u64) -> bool {
        if self.is_sandbox_mode() {
            return true;
        }

        match self
            .usage
            .increment(metric, amount, self.plan.current_plan())
        {
            IncrementOutcome::RejectedHardLimit => false,
            IncrementOutcome::Committed { alert } => {
                if let Some(alert) = alert {
                    self.notifier
                        .alert_created(alert.metric, alert.threshold, alert.percentage);
                }
                self.persist();
                true
            }
        }
    }

    /// Directly overwrites a metric's consumption (test/demo escape
    /// hatch). Skips the hard-limit check but still runs threshold
    /// detection.
    pub fn set_usage(&mut self, metric: UsageMetricKey, used: u64) {
        if let Some(alert) = self.usage.set_used(metric, used, self.plan.current_plan()) {
            self.notifier
                .alert_created(alert.metric, alert.threshold, alert.percentage);
        }
        self.persist();
    }

    /// Resets usage to period defaults and clears all alerts.
    pub fn reset_usage(&mut self) {
        self.usage.reset(self.plan.current_plan());
        self.persist();
    }

    /// Marks an alert dismissed. Idempotent.
    pub fn dismiss_alert(&mut self, id: AlertId) {
        self.usage.dismiss_alert(id);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = StateSnapshot {
            plan: self.plan.clone(),
            usage: self.usage.clone(),
        };
        if let Err(e) = self.store.save(&snapshot) {
            error!(error = %e, "failed to persist tenant snapshot");
        }
    }
}
