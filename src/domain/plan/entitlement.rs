//! Entitlement values and their truthiness rules.

use serde::{Deserialize, Serialize};

/// The value an entitlement resolves to.
///
/// Serialized untagged so persisted snapshots carry plain JSON booleans,
/// numbers, and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntitlementValue {
    /// On/off switch.
    Flag(bool),

    /// Non-negative quota or count.
    Quota(u64),

    /// Qualitative setting (e.g. a routing strategy name).
    Setting(String),
}

impl EntitlementValue {
    /// The default-deny value returned for unknown or unlisted features.
    pub const DENIED: EntitlementValue = EntitlementValue::Flag(false);

    /// Evaluates the truthiness rule for entitlement checks.
    ///
    /// Entitled: `Flag(true)`, any quota above zero, or any non-empty
    /// setting other than the literal `"false"`.
    pub fn is_entitled(&self) -> bool {
        match self {
            EntitlementValue::Flag(b) => *b,
            EntitlementValue::Quota(n) => *n > 0,
            EntitlementValue::Setting(s) => !s.is_empty() && s != "false",
        }
    }

    /// Whether this value grants a feature for the required-plan scan.
    ///
    /// Stricter than [`Self::is_entitled`]: only `Flag(true)` and positive
    /// quotas count as a grant; settings never unlock a feature on their
    /// own.
    pub fn is_granting(&self) -> bool {
        match self {
            EntitlementValue::Flag(b) => *b,
            EntitlementValue::Quota(n) => *n > 0,
            EntitlementValue::Setting(_) => false,
        }
    }
}

impl From<bool> for EntitlementValue {
    fn from(value: bool) -> Self {
        EntitlementValue::Flag(value)
    }
}

impl From<u64> for EntitlementValue {
    fn from(value: u64) -> Self {
        EntitlementValue::Quota(value)
    }
}

impl From<&str> for EntitlementValue {
    fn from(value: &str) -> Self {
        EntitlementValue::Setting(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_truthiness_follows_the_bool() {
        assert!(EntitlementValue::Flag(true).is_entitled());
        assert!(!EntitlementValue::Flag(false).is_entitled());
    }

    #[test]
    fn positive_quota_is_entitled() {
        assert!(EntitlementValue::Quota(1).is_entitled());
        assert!(EntitlementValue::Quota(50_000).is_entitled());
    }

    #[test]
    fn zero_quota_is_not_entitled() {
        assert!(!EntitlementValue::Quota(0).is_entitled());
    }

    #[test]
    fn nonempty_setting_is_entitled() {
        assert!(EntitlementValue::from("round_robin").is_entitled());
    }

    #[test]
    fn empty_setting_is_not_entitled() {
        assert!(!EntitlementValue::from("").is_entitled());
    }

    #[test]
    fn literal_false_setting_is_not_entitled() {
        assert!(!EntitlementValue::from("false").is_entitled());
    }

    #[test]
    fn settings_never_grant_for_plan_search() {
        assert!(!EntitlementValue::from("round_robin").is_granting());
        assert!(EntitlementValue::Flag(true).is_granting());
        assert!(EntitlementValue::Quota(10).is_granting());
        assert!(!EntitlementValue::Quota(0).is_granting());
    }

    #[test]
    fn denied_constant_is_false_flag() {
        assert_eq!(EntitlementValue::DENIED, EntitlementValue::Flag(false));
        assert!(!EntitlementValue::DENIED.is_entitled());
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&EntitlementValue::Flag(true)).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&EntitlementValue::Quota(42)).unwrap(),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&EntitlementValue::from("basic")).unwrap(),
            "\"basic\""
        );
    }

    #[test]
    fn deserializes_untagged() {
        let flag: EntitlementValue = serde_json::from_str("false").unwrap();
        assert_eq!(flag, EntitlementValue::Flag(false));

        let quota: EntitlementValue = serde_json::from_str("250").unwrap();
        assert_eq!(quota, EntitlementValue::Quota(250));

        let setting: EntitlementValue = serde_json::from_str("\"eu-west\"").unwrap();
        assert_eq!(setting, EntitlementValue::from("eu-west"));
    }
}
