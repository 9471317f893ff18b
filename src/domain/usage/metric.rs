//! Metered usage metrics.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monthly-metered consumption metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageMetricKey {
    /// Outbound messages across all channels.
    MessagesSent,
    /// Voice call minutes.
    CallsMinutes,
    /// AI inference tokens.
    AiTokens,
    /// Web chat widget sessions.
    WebchatSessions,
    /// Stored media and attachments, in GB.
    StorageGb,
    /// WhatsApp conversation windows opened.
    WhatsappConversations,
}

impl UsageMetricKey {
    /// Every metered metric. One counter exists per metric per period.
    pub const ALL: [UsageMetricKey; 6] = [
        UsageMetricKey::MessagesSent,
        UsageMetricKey::CallsMinutes,
        UsageMetricKey::AiTokens,
        UsageMetricKey::WebchatSessions,
        UsageMetricKey::StorageGb,
        UsageMetricKey::WhatsappConversations,
    ];

    /// The canonical dot-namespaced identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageMetricKey::MessagesSent => "messages.sent",
            UsageMetricKey::CallsMinutes => "calls.minutes",
            UsageMetricKey::AiTokens => "ai.tokens",
            UsageMetricKey::WebchatSessions => "webchat.sessions",
            UsageMetricKey::StorageGb => "storage.gb",
            UsageMetricKey::WhatsappConversations => "whatsapp.conversations",
        }
    }
}

impl fmt::Display for UsageMetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageMetricKey {
    type Err = UnknownMetricKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsageMetricKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownMetricKey(s.to_string()))
    }
}

impl Serialize for UsageMetricKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UsageMetricKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A metric identifier not present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown usage metric: {0}")]
pub struct UnknownMetricKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_metrics_roundtrip_through_strings() {
        for metric in UsageMetricKey::ALL {
            let parsed: UsageMetricKey = metric.as_str().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn unknown_metric_fails_to_parse() {
        assert!("emails.bounced".parse::<UsageMetricKey>().is_err());
    }

    #[test]
    fn serializes_as_dotted_string() {
        let json = serde_json::to_string(&UsageMetricKey::AiTokens).unwrap();
        assert_eq!(json, "\"ai.tokens\"");
    }

    #[test]
    fn deserializes_from_dotted_string() {
        let metric: UsageMetricKey = serde_json::from_str("\"storage.gb\"").unwrap();
        assert_eq!(metric, UsageMetricKey::StorageGb);
    }
}
