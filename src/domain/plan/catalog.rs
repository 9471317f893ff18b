//! Static plan entitlement tables.
//!
//! Each tier's table is independently authored: absence of a key means
//! "not entitled" for that tier, never "inherit from a lower tier". The
//! tables are the source of truth for plan-derived entitlements; tenant
//! overrides layer on top of them at resolution time.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{EntitlementValue, FeatureKey, PlanTier};

const ON: EntitlementValue = EntitlementValue::Flag(true);
const OFF: EntitlementValue = EntitlementValue::Flag(false);

static FREE_TABLE: &[(FeatureKey, EntitlementValue)] = &[
    (FeatureKey::SandboxMode, ON),
    (FeatureKey::TenantLiveMode, OFF),
    (FeatureKey::ChannelsWhatsapp, ON), // Simulated only
    (FeatureKey::ChannelsSms, OFF),
    (FeatureKey::ChannelsEmail, OFF),
    (FeatureKey::ChannelsVoice, OFF),
    (FeatureKey::CrmContacts, ON),
    (FeatureKey::CrmDeals, ON),
    (FeatureKey::CrmPipelines, ON),
    (FeatureKey::CrmImport, OFF),
    (FeatureKey::CrmExport, OFF),
    (FeatureKey::AutomationBuilder, ON),
    (FeatureKey::AutomationPublish, OFF),
    (FeatureKey::AutomationSimulate, ON),
    (FeatureKey::AiAgentBuilder, ON),
    (FeatureKey::AiAgentDeploy, OFF),
    (FeatureKey::AiInferenceLive, OFF),
    (FeatureKey::TelephonyUi, ON),
    (FeatureKey::TelephonyIvrBuilder, ON),
    (FeatureKey::TelephonyCallsLive, OFF),
    (FeatureKey::DashboardView, ON),
    (FeatureKey::DashboardDataDemo, ON),
    (FeatureKey::BrandingPreview, ON),
    (FeatureKey::BrandingCustomDomain, OFF),
    (FeatureKey::ApiDocsReadonly, ON),
    (FeatureKey::ApiKeysIssue, OFF),
];

static STARTER_TABLE: &[(FeatureKey, EntitlementValue)] = &[
    (FeatureKey::SandboxMode, OFF),
    (FeatureKey::TenantLiveMode, ON),
    (FeatureKey::RegionsMulti, OFF),
    (FeatureKey::ChannelsWhatsapp, ON),
    (FeatureKey::ChannelsSms, ON),
    (FeatureKey::ChannelsEmail, ON),
    (FeatureKey::ChannelsVoice, ON),
    (FeatureKey::ChannelsWebchat, ON),
    (FeatureKey::ChannelsTelegram, OFF),
    (FeatureKey::CrmContacts, ON),
    (FeatureKey::CrmDeals, ON),
    (FeatureKey::CrmPipelines, ON),
    (FeatureKey::CrmImport, ON),
    (FeatureKey::CrmExport, OFF),
    (FeatureKey::CrmLiveData, ON),
    (FeatureKey::AutomationBuilder, ON),
    (FeatureKey::AutomationPublish, ON),
    (FeatureKey::AutomationSimulate, ON),
    (FeatureKey::AutomationConditionsAdvanced, OFF),
    (FeatureKey::AiAgentBuilder, ON),
    (FeatureKey::AiAgentDeploy, OFF),
    (FeatureKey::AiSummaries, ON),
    (FeatureKey::AiReplySuggestions, ON),
    (FeatureKey::AiInferenceLive, ON),
    (FeatureKey::TelephonyUi, ON),
    (FeatureKey::TelephonyIvrBuilder, ON),
    (FeatureKey::TelephonyCallsLive, ON),
    (FeatureKey::TelephonyRecordings, OFF),
    (FeatureKey::TelephonyIvrDeploy, OFF),
    (FeatureKey::AnalyticsBasic, ON),
    (FeatureKey::AnalyticsAdvanced, OFF),
    (FeatureKey::BrandingPreview, ON),
    (FeatureKey::BrandingBasic, ON),
    (FeatureKey::BrandingCustomDomain, OFF),
    (FeatureKey::ApiDocsReadonly, ON),
    (FeatureKey::ApiKeysIssue, OFF),
];

static GROWTH_TABLE: &[(FeatureKey, EntitlementValue)] = &[
    (FeatureKey::SandboxMode, OFF),
    (FeatureKey::TenantLiveMode, ON),
    (FeatureKey::RegionsMulti, OFF),
    (FeatureKey::ChannelsWhatsapp, ON),
    (FeatureKey::ChannelsSms, ON),
    (FeatureKey::ChannelsMms, ON),
    (FeatureKey::ChannelsEmail, ON),
    (FeatureKey::ChannelsVoice, ON),
    (FeatureKey::ChannelsWebchat, ON),
    (FeatureKey::ChannelsTelegram, ON),
    (FeatureKey::ChannelsSocial, ON), // Limited
    (FeatureKey::CrmContacts, ON),
    (FeatureKey::CrmDeals, ON),
    (FeatureKey::CrmPipelines, ON),
    (FeatureKey::CrmImport, ON),
    (FeatureKey::CrmExport, ON),
    (FeatureKey::CrmLiveData, ON),
    (FeatureKey::AutomationBuilder, ON),
    (FeatureKey::AutomationPublish, ON),
    (FeatureKey::AutomationSimulate, ON),
    (FeatureKey::AutomationConditionsAdvanced, ON),
    (FeatureKey::AutomationWebhooks, OFF),
    (FeatureKey::AiAgentBuilder, ON),
    (FeatureKey::AiAgentDeploy, ON),
    (FeatureKey::AiSummaries, ON),
    (FeatureKey::AiReplySuggestions, ON),
    (FeatureKey::AiInferenceLive, ON),
    (FeatureKey::AiIntentDetection, ON),
    (FeatureKey::TelephonyUi, ON),
    (FeatureKey::TelephonyIvrBuilder, ON),
    (FeatureKey::TelephonyCallsLive, ON),
    (FeatureKey::TelephonyRecordings, ON),
    (FeatureKey::TelephonyIvrDeploy, ON),
    (FeatureKey::TelephonyRoutingAdvanced, ON),
    (FeatureKey::AnalyticsBasic, ON),
    (FeatureKey::AnalyticsAdvanced, ON),
    (FeatureKey::BrandingPreview, ON),
    (FeatureKey::BrandingBasic, ON),
    (FeatureKey::BrandingCustomDomain, OFF),
    (FeatureKey::UsersRoles, ON),
    (FeatureKey::UsersPermissionsAdvanced, ON),
    (FeatureKey::ApiDocsReadonly, ON),
    (FeatureKey::ApiKeysIssue, OFF),
];

static PRO_TABLE: &[(FeatureKey, EntitlementValue)] = &[
    (FeatureKey::SandboxMode, OFF),
    (FeatureKey::TenantLiveMode, ON),
    (FeatureKey::RegionsMulti, ON),
    (FeatureKey::ChannelsWhatsapp, ON),
    (FeatureKey::ChannelsSms, ON),
    (FeatureKey::ChannelsMms, ON),
    (FeatureKey::ChannelsEmail, ON),
    (FeatureKey::ChannelsVoice, ON),
    (FeatureKey::ChannelsWebchat, ON),
    (FeatureKey::ChannelsTelegram, ON),
    (FeatureKey::ChannelsFacebook, ON),
    (FeatureKey::ChannelsInstagram, ON),
    (FeatureKey::ChannelsTeams, ON),
    (FeatureKey::ChannelsSlack, ON),
    (FeatureKey::CrmContacts, ON),
    (FeatureKey::CrmDeals, ON),
    (FeatureKey::CrmPipelines, ON),
    (FeatureKey::CrmImport, ON),
    (FeatureKey::CrmExport, ON),
    (FeatureKey::CrmLiveData, ON),
    (FeatureKey::AutomationBuilder, ON),
    (FeatureKey::AutomationPublish, ON),
    (FeatureKey::AutomationSimulate, ON),
    (FeatureKey::AutomationConditionsAdvanced, ON),
    (FeatureKey::AutomationWebhooks, ON),
    (FeatureKey::AiAgentBuilder, ON),
    (FeatureKey::AiAgentDeploy, ON),
    (FeatureKey::AiSummaries, ON),
    (FeatureKey::AiReplySuggestions, ON),
    (FeatureKey::AiInferenceLive, ON),
    (FeatureKey::AiIntentDetection, ON),
    (FeatureKey::AiSentiment, ON),
    (FeatureKey::AiQa, ON),
    (FeatureKey::TelephonyUi, ON),
    (FeatureKey::TelephonyIvrBuilder, ON),
    (FeatureKey::TelephonyCallsLive, ON),
    (FeatureKey::TelephonyRecordings, ON),
    (FeatureKey::TelephonyIvrDeploy, ON),
    (FeatureKey::TelephonyRoutingAdvanced, ON),
    (FeatureKey::AnalyticsBasic, ON),
    (FeatureKey::AnalyticsAdvanced, ON),
    (FeatureKey::AnalyticsExport, ON),
    (FeatureKey::BrandingPreview, ON),
    (FeatureKey::BrandingBasic, ON),
    (FeatureKey::BrandingCustomDomain, ON),
    (FeatureKey::BrandingFullWhiteLabel, ON),
    (FeatureKey::UsersRoles, ON),
    (FeatureKey::UsersPermissionsAdvanced, ON),
    (FeatureKey::ApiDocsReadonly, ON),
    (FeatureKey::ApiKeysIssue, ON),
    (FeatureKey::WebhooksCreate, ON),
    (FeatureKey::AuditLogs, ON),
];

static ENTERPRISE_TABLE: &[(FeatureKey, EntitlementValue)] = &[
    (FeatureKey::SandboxMode, OFF),
    (FeatureKey::TenantLiveMode, ON),
    (FeatureKey::RegionsMulti, ON),
    (FeatureKey::ChannelsWhatsapp, ON),
    (FeatureKey::ChannelsSms, ON),
    (FeatureKey::ChannelsMms, ON),
    (FeatureKey::ChannelsEmail, ON),
    (FeatureKey::ChannelsVoice, ON),
    (FeatureKey::ChannelsWebchat, ON),
    (FeatureKey::ChannelsTelegram, ON),
    (FeatureKey::ChannelsFacebook, ON),
    (FeatureKey::ChannelsInstagram, ON),
    (FeatureKey::ChannelsTeams, ON),
    (FeatureKey::ChannelsSlack, ON),
    (FeatureKey::CrmContacts, ON),
    (FeatureKey::CrmDeals, ON),
    (FeatureKey::CrmPipelines, ON),
    (FeatureKey::CrmImport, ON),
    (FeatureKey::CrmExport, ON),
    (FeatureKey::CrmLiveData, ON),
    (FeatureKey::AutomationBuilder, ON),
    (FeatureKey::AutomationPublish, ON),
    (FeatureKey::AutomationSimulate, ON),
    (FeatureKey::AutomationConditionsAdvanced, ON),
    (FeatureKey::AutomationWebhooks, ON),
    (FeatureKey::AiAgentBuilder, ON),
    (FeatureKey::AiAgentDeploy, ON),
    (FeatureKey::AiSummaries, ON),
    (FeatureKey::AiReplySuggestions, ON),
    (FeatureKey::AiInferenceLive, ON),
    (FeatureKey::AiIntentDetection, ON),
    (FeatureKey::AiSentiment, ON),
    (FeatureKey::AiQa, ON),
    (FeatureKey::TelephonyUi, ON),
    (FeatureKey::TelephonyIvrBuilder, ON),
    (FeatureKey::TelephonyCallsLive, ON),
    (FeatureKey::TelephonyRecordings, ON),
    (FeatureKey::TelephonyIvrDeploy, ON),
    (FeatureKey::TelephonyRoutingAdvanced, ON),
    (FeatureKey::AnalyticsBasic, ON),
    (FeatureKey::AnalyticsAdvanced, ON),
    (FeatureKey::AnalyticsExport, ON),
    (FeatureKey::BrandingPreview, ON),
    (FeatureKey::BrandingBasic, ON),
    (FeatureKey::BrandingCustomDomain, ON),
    (FeatureKey::BrandingFullWhiteLabel, ON),
    (FeatureKey::UsersRoles, ON),
    (FeatureKey::UsersPermissionsAdvanced, ON),
    (FeatureKey::ApiDocsReadonly, ON),
    (FeatureKey::ApiKeysIssue, ON),
    (FeatureKey::WebhooksCreate, ON),
    (FeatureKey::AuditLogs, ON),
    (FeatureKey::SsoSaml, ON),
];

fn build(entries: &[(FeatureKey, EntitlementValue)]) -> HashMap<FeatureKey, EntitlementValue> {
    entries.iter().cloned().collect()
}

static FREE: Lazy<HashMap<FeatureKey, EntitlementValue>> = Lazy::new(|| build(FREE_TABLE));
static STARTER: Lazy<HashMap<FeatureKey, EntitlementValue>> = Lazy::new(|| build(STARTER_TABLE));
static GROWTH: Lazy<HashMap<FeatureKey, EntitlementValue>> = Lazy::new(|| build(GROWTH_TABLE));
static PRO: Lazy<HashMap<FeatureKey, EntitlementValue>> = Lazy::new(|| build(PRO_TABLE));
static ENTERPRISE: Lazy<HashMap<FeatureKey, EntitlementValue>> =
    Lazy::new(|| build(ENTERPRISE_TABLE));

/// Returns the entitlement table for a tier.
pub fn entitlement_table(tier: PlanTier) -> &'static HashMap<FeatureKey, EntitlementValue> {
    match tier {
        PlanTier::Free => &FREE,
        PlanTier::Starter => &STARTER,
        PlanTier::Growth => &GROWTH,
        PlanTier::Pro => &PRO,
        PlanTier::Enterprise => &ENTERPRISE,
    }
}

/// Looks up a feature in a tier's table.
///
/// `None` means the tier does not mention the key at all, which resolves
/// as not entitled.
pub fn plan_entitlement(tier: PlanTier, feature: FeatureKey) -> Option<&'static EntitlementValue> {
    entitlement_table(tier).get(&feature)
}

/// Returns the lowest tier whose table grants the feature.
///
/// Scans tiers in ascending order and returns the first grant
/// (`Flag(true)` or a positive quota). Returns `None` when no plan
/// grants the feature, which callers must treat as "never available"
/// rather than an error. Tenant overrides are ignored by design: this
/// answers "what plan would unlock this", not "is this tenant unlocked".
pub fn required_plan_for(feature: FeatureKey) -> Option<PlanTier> {
    PlanTier::ASCENDING.into_iter().find(|tier| {
        plan_entitlement(*tier, feature)
            .map(EntitlementValue::is_granting)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_authors_both_mode_flags() {
        // tenant.live_mode and sandbox.mode are independently authored
        // flags; a table missing either is a catalog defect.
        for tier in PlanTier::ASCENDING {
            assert!(
                plan_entitlement(tier, FeatureKey::TenantLiveMode).is_some(),
                "{tier} table missing tenant.live_mode"
            );
            assert!(
                plan_entitlement(tier, FeatureKey::SandboxMode).is_some(),
                "{tier} table missing sandbox.mode"
            );
        }
    }

    #[test]
    fn only_free_is_sandboxed() {
        assert_eq!(
            plan_entitlement(PlanTier::Free, FeatureKey::SandboxMode),
            Some(&EntitlementValue::Flag(true))
        );
        for tier in [
            PlanTier::Starter,
            PlanTier::Growth,
            PlanTier::Pro,
            PlanTier::Enterprise,
        ] {
            assert_eq!(
                plan_entitlement(tier, FeatureKey::SandboxMode),
                Some(&EntitlementValue::Flag(false)),
                "{tier} should not be sandboxed"
            );
        }
    }

    #[test]
    fn absent_key_resolves_to_none() {
        assert!(plan_entitlement(PlanTier::Free, FeatureKey::SsoSaml).is_none());
        assert!(plan_entitlement(PlanTier::Pro, FeatureKey::SsoSaml).is_none());
    }

    #[test]
    fn required_plan_finds_lowest_granting_tier() {
        assert_eq!(
            required_plan_for(FeatureKey::ChannelsSms),
            Some(PlanTier::Starter)
        );
        assert_eq!(
            required_plan_for(FeatureKey::CrmExport),
            Some(PlanTier::Growth)
        );
        assert_eq!(
            required_plan_for(FeatureKey::ApiKeysIssue),
            Some(PlanTier::Pro)
        );
        assert_eq!(
            required_plan_for(FeatureKey::SsoSaml),
            Some(PlanTier::Enterprise)
        );
    }

    #[test]
    fn free_grants_resolve_to_free() {
        assert_eq!(
            required_plan_for(FeatureKey::CrmContacts),
            Some(PlanTier::Free)
        );
    }

    #[test]
    fn feature_granted_nowhere_has_no_required_plan() {
        // dashboard.realtime is in the catalog but no table grants it.
        assert_eq!(required_plan_for(FeatureKey::DashboardRealtime), None);
    }

    #[test]
    fn required_plan_is_monotonic() {
        // The scan must never return a tier above the lowest grant.
        for feature in FeatureKey::ALL {
            if let Some(required) = required_plan_for(feature) {
                for tier in PlanTier::ASCENDING {
                    if tier >= required {
                        break;
                    }
                    let granted = plan_entitlement(tier, feature)
                        .map(EntitlementValue::is_granting)
                        .unwrap_or(false);
                    assert!(!granted, "{feature} granted below {required} at {tier}");
                }
            }
        }
    }

    #[test]
    fn explicit_false_does_not_grant() {
        // channels.telegram is authored OFF in Starter and ON from Growth.
        assert_eq!(
            required_plan_for(FeatureKey::ChannelsTelegram),
            Some(PlanTier::Growth)
        );
    }
}
