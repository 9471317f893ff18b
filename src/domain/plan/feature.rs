//! Feature key catalog.
//!
//! Closed set of dot-namespaced feature identifiers. The namespace prefix
//! is purely organizational; it carries no resolution semantics.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A feature gate identifier from the platform catalog.
///
/// Keys absent from the current plan's entitlement table resolve as
/// not entitled (default-deny); an unknown key can therefore never
/// accidentally grant access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    // Tenant level
    TenantLiveMode,
    SandboxMode,
    RegionsMulti,

    // Unified inbox & channels
    ChannelsWhatsapp,
    ChannelsSms,
    ChannelsMms,
    ChannelsEmail,
    ChannelsVoice,
    ChannelsWebchat,
    ChannelsTelegram,
    ChannelsFacebook,
    ChannelsInstagram,
    ChannelsSocial,
    ChannelsTeams,
    ChannelsSlack,

    // CRM
    CrmContacts,
    CrmDeals,
    CrmPipelines,
    CrmImport,
    CrmExport,
    CrmLiveData,

    // Automations
    AutomationBuilder,
    AutomationPublish,
    AutomationSimulate,
    AutomationConditionsAdvanced,
    AutomationWebhooks,

    // AI
    AiAgentBuilder,
    AiAgentDeploy,
    AiInferenceLive,
    AiSummaries,
    AiReplySuggestions,
    AiIntentDetection,
    AiSentiment,
    AiQa,

    // Telephony
    TelephonyUi,
    TelephonyIvrBuilder,
    TelephonyCallsLive,
    TelephonyRecordings,
    TelephonyIvrDeploy,
    TelephonyRoutingAdvanced,

    // Dashboard
    DashboardView,
    DashboardDataDemo,
    DashboardRealtime,

    // Analytics
    AnalyticsBasic,
    AnalyticsAdvanced,
    AnalyticsExport,

    // Branding
    BrandingPreview,
    BrandingBasic,
    BrandingCustomDomain,
    BrandingFullWhiteLabel,

    // API / dev
    ApiDocsReadonly,
    ApiKeysIssue,
    WebhooksCreate,

    // Team
    UsersRoles,
    UsersPermissionsAdvanced,

    // Compliance
    AuditLogs,
    SsoSaml,
}

impl FeatureKey {
    /// Every key in the catalog.
    pub const ALL: [FeatureKey; 57] = [
        FeatureKey::TenantLiveMode,
        FeatureKey::SandboxMode,
        FeatureKey::RegionsMulti,
        FeatureKey::ChannelsWhatsapp,
        FeatureKey::ChannelsSms,
        FeatureKey::ChannelsMms,
        FeatureKey::ChannelsEmail,
        FeatureKey::ChannelsVoice,
        FeatureKey::ChannelsWebchat,
        FeatureKey::ChannelsTelegram,
        FeatureKey::ChannelsFacebook,
        FeatureKey::ChannelsInstagram,
        FeatureKey::ChannelsSocial,
        FeatureKey::ChannelsTeams,
        FeatureKey::ChannelsSlack,
        FeatureKey::CrmContacts,
        FeatureKey::CrmDeals,
        FeatureKey::CrmPipelines,
        FeatureKey::CrmImport,
        FeatureKey::CrmExport,
        FeatureKey::CrmLiveData,
        FeatureKey::AutomationBuilder,
        FeatureKey::AutomationPublish,
        FeatureKey::AutomationSimulate,
        FeatureKey::AutomationConditionsAdvanced,
        FeatureKey::AutomationWebhooks,
        FeatureKey::AiAgentBuilder,
        FeatureKey::AiAgentDeploy,
        FeatureKey::AiInferenceLive,
        FeatureKey::AiSummaries,
        FeatureKey::AiReplySuggestions,
        FeatureKey::AiIntentDetection,
        FeatureKey::AiSentiment,
        FeatureKey::AiQa,
        FeatureKey::TelephonyUi,
        FeatureKey::TelephonyIvrBuilder,
        FeatureKey::TelephonyCallsLive,
        FeatureKey::TelephonyRecordings,
        FeatureKey::TelephonyIvrDeploy,
        FeatureKey::TelephonyRoutingAdvanced,
        FeatureKey::DashboardView,
        FeatureKey::DashboardDataDemo,
        FeatureKey::DashboardRealtime,
        FeatureKey::AnalyticsBasic,
        FeatureKey::AnalyticsAdvanced,
        FeatureKey::AnalyticsExport,
        FeatureKey::BrandingPreview,
        FeatureKey::BrandingBasic,
        FeatureKey::BrandingCustomDomain,
        FeatureKey::BrandingFullWhiteLabel,
        FeatureKey::ApiDocsReadonly,
        FeatureKey::ApiKeysIssue,
        FeatureKey::WebhooksCreate,
        FeatureKey::UsersRoles,
        FeatureKey::UsersPermissionsAdvanced,
        FeatureKey::AuditLogs,
        FeatureKey::SsoSaml,
    ];

    /// The canonical dot-namespaced identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::TenantLiveMode => "tenant.live_mode",
            FeatureKey::SandboxMode => "sandbox.mode",
            FeatureKey::RegionsMulti => "regions.multi",
            FeatureKey::ChannelsWhatsapp => "channels.whatsapp",
            FeatureKey::ChannelsSms => "channels.sms",
            FeatureKey::ChannelsMms => "channels.mms",
            FeatureKey::ChannelsEmail => "channels.email",
            FeatureKey::ChannelsVoice => "channels.voice",
            FeatureKey::ChannelsWebchat => "channels.webchat",
            FeatureKey::ChannelsTelegram => "channels.telegram",
            FeatureKey::ChannelsFacebook => "channels.facebook",
            FeatureKey::ChannelsInstagram => "channels.instagram",
            FeatureKey::ChannelsSocial => "channels.social",
            FeatureKey::ChannelsTeams => "channels.teams",
            FeatureKey::ChannelsSlack => "channels.slack",
            FeatureKey::CrmContacts => "crm.contacts",
            FeatureKey::CrmDeals => "crm.deals",
            FeatureKey::CrmPipelines => "crm.pipelines",
            FeatureKey::CrmImport => "crm.import",
            FeatureKey::CrmExport => "crm.export",
            FeatureKey::CrmLiveData => "crm.live_data",
            FeatureKey::AutomationBuilder => "automation.builder",
            FeatureKey::AutomationPublish => "automation.publish",
            FeatureKey::AutomationSimulate => "automation.simulate",
            FeatureKey::AutomationConditionsAdvanced => "automation.conditions.advanced",
            FeatureKey::AutomationWebhooks => "automation.webhooks",
            FeatureKey::AiAgentBuilder => "ai.agent.builder",
            FeatureKey::AiAgentDeploy => "ai.agent.deploy",
            FeatureKey::AiInferenceLive => "ai.inference.live",
            FeatureKey::AiSummaries => "ai.summaries",
            FeatureKey::AiReplySuggestions => "ai.reply_suggestions",
            FeatureKey::AiIntentDetection => "ai.intent_detection",
            FeatureKey::AiSentiment => "ai.sentiment",
            FeatureKey::AiQa => "ai.qa",
            FeatureKey::TelephonyUi => "telephony.ui",
            FeatureKey::TelephonyIvrBuilder => "telephony.ivr.builder",
            FeatureKey::TelephonyCallsLive => "telephony.calls.live",
            FeatureKey::TelephonyRecordings => "telephony.recordings",
            FeatureKey::TelephonyIvrDeploy => "telephony.ivr.deploy",
            FeatureKey::TelephonyRoutingAdvanced => "telephony.routing.advanced",
            FeatureKey::DashboardView => "dashboard.view",
            FeatureKey::DashboardDataDemo => "dashboard.data.demo",
            FeatureKey::DashboardRealtime => "dashboard.realtime",
            FeatureKey::AnalyticsBasic => "analytics.basic",
            FeatureKey::AnalyticsAdvanced => "analytics.advanced",
            FeatureKey::AnalyticsExport => "analytics.export",
            FeatureKey::BrandingPreview => "branding.preview",
            FeatureKey::BrandingBasic => "branding.basic",
            FeatureKey::BrandingCustomDomain => "branding.custom_domain",
            FeatureKey::BrandingFullWhiteLabel => "branding.full_white_label",
            FeatureKey::ApiDocsReadonly => "api.docs.readonly",
            FeatureKey::ApiKeysIssue => "api.keys.issue",
            FeatureKey::WebhooksCreate => "webhooks.create",
            FeatureKey::UsersRoles => "users.roles",
            FeatureKey::UsersPermissionsAdvanced => "users.permissions.advanced",
            FeatureKey::AuditLogs => "audit.logs",
            FeatureKey::SsoSaml => "sso.saml",
        }
    }

    /// The organizational namespace (text before the first dot).
    pub fn namespace(&self) -> &'static str {
        let key = self.as_str();
        match key.split_once('.') {
            Some((ns, _)) => ns,
            None => key,
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = UnknownFeatureKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownFeatureKey(s.to_string()))
    }
}

impl Serialize for FeatureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatureKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A feature identifier not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature key: {0}")]
pub struct UnknownFeatureKey(pub String);
