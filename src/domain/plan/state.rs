//! Plan state aggregate and entitlement resolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{
    catalog, EntitlementValue, FeatureKey, PlanTier, TenantOverride, TenantStatus,
};

/// Length of the evaluation trial started for new tenants.
pub const TRIAL_DAYS: i64 = 14;

/// A tenant's plan state: current tier, account status, trial window,
/// and entitlement overrides.
///
/// Resolution order is strict and short-circuits:
/// 1. unexpired tenant override,
/// 2. current plan's entitlement table,
/// 3. default-deny.
///
/// Business outcomes (locked feature, expired override) are regular
/// return values; nothing here errors at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    current_plan: PlanTier,
    tenant_status: TenantStatus,
    trial_ends_at: Option<Timestamp>,
    overrides: Vec<TenantOverride>,
}

impl PlanState {
    /// Bootstraps a brand-new tenant: Free plan, trial status, trial
    /// ending [`TRIAL_DAYS`] from `now`.
    pub fn new_trial(now: Timestamp) -> Self {
        Self {
            current_plan: PlanTier::Free,
            tenant_status: TenantStatus::Trial,
            trial_ends_at: Some(now.add_days(TRIAL_DAYS)),
            overrides: Vec::new(),
        }
    }

    /// The tenant's current plan tier.
    pub fn current_plan(&self) -> PlanTier {
        self.current_plan
    }

    /// The tenant's account status.
    pub fn tenant_status(&self) -> TenantStatus {
        self.tenant_status
    }

    /// When the trial ends, if the tenant is on one.
    pub fn trial_ends_at(&self) -> Option<&Timestamp> {
        self.trial_ends_at.as_ref()
    }

    /// All stored overrides, including expired ones.
    pub fn overrides(&self) -> &[TenantOverride] {
        &self.overrides
    }

    /// Resolves the entitlement value for a feature.
    ///
    /// An expired override behaves exactly as if absent: resolution
    /// falls through to the plan table.
    pub fn entitlement_value(&self, feature: FeatureKey, now: &Timestamp) -> EntitlementValue {
        if let Some(ov) = self.overrides.iter().find(|o| o.feature == feature) {
            if ov.is_active(now) {
                return ov.value.clone();
            }
        }

        match catalog::plan_entitlement(self.current_plan, feature) {
            Some(value) => value.clone(),
            None => EntitlementValue::DENIED,
        }
    }

    /// Applies the truthiness rule to [`Self::entitlement_value`].
    pub fn is_entitled(&self, feature: FeatureKey, now: &Timestamp) -> bool {
        self.entitlement_value(feature, now).is_entitled()
    }

    /// Whether the tenant operates in live mode.
    ///
    /// Strict check for `Flag(true)` on `tenant.live_mode`. Deliberately
    /// NOT derived from [`Self::is_sandbox_mode`]: the two flags are
    /// independently authored per plan, and a misconfigured table that
    /// sets both or neither must surface as-is.
    pub fn is_live_mode(&self, now: &Timestamp) -> bool {
        self.entitlement_value(FeatureKey::TenantLiveMode, now) == EntitlementValue::Flag(true)
    }

    /// Whether the tenant operates in sandbox mode.
    ///
    /// Strict check for `Flag(true)` on `sandbox.mode`; independent of
    /// [`Self::is_live_mode`] for the same reason.
    pub fn is_sandbox_mode(&self, now: &Timestamp) -> bool {
        self.entitlement_value(FeatureKey::SandboxMode, now) == EntitlementValue::Flag(true)
    }

    /// Whether the tenant is on an unexpired trial.
    pub fn is_trial_active(&self, now: &Timestamp) -> bool {
        self.tenant_status.is_trial()
            && self
                .trial_ends_at
                .as_ref()
                .map(|ends| now.is_before(ends))
                .unwrap_or(false)
    }

    /// Switches the tenant to a new plan.
    ///
    /// Administrative action; any transition is permitted, including
    /// downgrades. Moving to Free reverts status to trial with the trial
    /// end date preserved; any paid plan activates the account and
    /// clears the trial end date.
    pub fn upgrade_plan(&mut self, new_plan: PlanTier) {
        self.current_plan = new_plan;
        if new_plan == PlanTier::Free {
            self.tenant_status = TenantStatus::Trial;
        } else {
            self.tenant_status = TenantStatus::Active;
            self.trial_ends_at = None;
        }
    }

    /// Sets an override for a feature, replacing any existing one for
    /// the same key (remove-then-append, no merge).
    pub fn set_override(
        &mut self,
        feature: FeatureKey,
        value: impl Into<EntitlementValue>,
        expires_at: Option<Timestamp>,
    ) {
        self.overrides.retain(|o| o.feature != feature);
        self.overrides
            .push(TenantOverride::new(feature, value, expires_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::now()
    }

    // Resolution precedence

    #[test]
    fn override_wins_over_plan_table() {
        let mut state = PlanState::new_trial(now());
        // Free plan authors crm.export OFF.
        state.set_override(FeatureKey::CrmExport, true, None);

        assert_eq!(
            state.entitlement_value(FeatureKey::CrmExport, &now()),
            EntitlementValue::Flag(true)
        );
        assert!(state.is_entitled(FeatureKey::CrmExport, &now()));
    }

    #[test]
    fn expired_override_falls_through_to_plan() {
        let t = now();
        let mut state = PlanState::new_trial(t);
        state.set_override(FeatureKey::CrmExport, true, Some(t.minus_days(1)));

        assert_eq!(
            state.entitlement_value(FeatureKey::CrmExport, &t),
            EntitlementValue::Flag(false)
        );
        assert!(!state.is_entitled(FeatureKey::CrmExport, &t));
    }

    #[test]
    fn unlisted_feature_is_default_denied() {
        let state = PlanState::new_trial(now());
        // Free plan never mentions sso.saml.
        assert_eq!(
            state.entitlement_value(FeatureKey::SsoSaml, &now()),
            EntitlementValue::DENIED
        );
        assert!(!state.is_entitled(FeatureKey::SsoSaml, &now()));
    }

    #[test]
    fn plan_table_used_when_no_override() {
        let state = PlanState::new_trial(now());
        assert!(state.is_entitled(FeatureKey::CrmContacts, &now()));
        assert!(!state.is_entitled(FeatureKey::ChannelsSms, &now()));
    }

    #[test]
    fn override_can_deny_a_plan_grant() {
        let mut state = PlanState::new_trial(now());
        state.set_override(FeatureKey::CrmContacts, false, None);
        assert!(!state.is_entitled(FeatureKey::CrmContacts, &now()));
    }

    #[test]
    fn last_override_write_wins() {
        let mut state = PlanState::new_trial(now());
        state.set_override(FeatureKey::AiQa, true, None);
        state.set_override(FeatureKey::AiQa, false, None);

        assert_eq!(state.overrides().len(), 1);
        assert!(!state.is_entitled(FeatureKey::AiQa, &now()));
    }

    // Mode flags

    #[test]
    fn free_tenant_is_sandboxed_not_live() {
        let state = PlanState::new_trial(now());
        assert!(state.is_sandbox_mode(&now()));
        assert!(!state.is_live_mode(&now()));
    }

    #[test]
    fn paid_tenant_is_live_not_sandboxed() {
        let mut state = PlanState::new_trial(now());
        state.upgrade_plan(PlanTier::Starter);
        assert!(state.is_live_mode(&now()));
        assert!(!state.is_sandbox_mode(&now()));
    }

    #[test]
    fn mode_flags_are_independent_lookups() {
        // A quota override on sandbox.mode is truthy but not Flag(true);
        // the strict mode check must not treat it as sandbox.
        let mut state = PlanState::new_trial(now());
        state.set_override(FeatureKey::SandboxMode, 1u64, None);
        assert!(!state.is_sandbox_mode(&now()));
        assert!(state.is_entitled(FeatureKey::SandboxMode, &now()));
    }

    // Plan changes & trial

    #[test]
    fn upgrade_to_paid_activates_and_clears_trial_end() {
        let mut state = PlanState::new_trial(now());
        state.upgrade_plan(PlanTier::Growth);

        assert_eq!(state.current_plan(), PlanTier::Growth);
        assert_eq!(state.tenant_status(), TenantStatus::Active);
        assert!(state.trial_ends_at().is_none());
    }

    #[test]
    fn downgrade_to_free_reverts_to_trial_preserving_end_date() {
        let t = now();
        let mut state = PlanState::new_trial(t);
        let original_end = *state.trial_ends_at().unwrap();

        state.upgrade_plan(PlanTier::Free);

        assert_eq!(state.tenant_status(), TenantStatus::Trial);
        assert_eq!(state.trial_ends_at(), Some(&original_end));
    }

    #[test]
    fn trial_is_active_while_end_date_is_future() {
        let t = now();
        let state = PlanState::new_trial(t);
        assert!(state.is_trial_active(&t));
        assert!(!state.is_trial_active(&t.add_days(TRIAL_DAYS + 1)));
    }

    #[test]
    fn trial_is_not_active_after_upgrade() {
        let mut state = PlanState::new_trial(now());
        state.upgrade_plan(PlanTier::Pro);
        assert!(!state.is_trial_active(&now()));
    }

    #[test]
    fn state_roundtrips_through_json() {
        let mut state = PlanState::new_trial(now());
        state.upgrade_plan(PlanTier::Starter);
        state.set_override(FeatureKey::CrmExport, true, Some(now().add_days(30)));

        let json = serde_json::to_string(&state).unwrap();
        let back: PlanState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
