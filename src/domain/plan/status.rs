//! Tenant account status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tenant account.
///
/// This is advisory state mirrored from the billing system; the core
/// places no restrictions on transitions (`upgrade_plan` may set any
/// tier at any time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    /// Evaluating on the Free plan; `trial_ends_at` is set.
    Trial,

    /// Paid plan in good standing.
    Active,

    /// Payment failed; access continues during the grace period.
    PastDue,

    /// Account disabled by the platform.
    Suspended,
}

impl TenantStatus {
    /// Returns true for the trial state.
    pub fn is_trial(&self) -> bool {
        matches!(self, TenantStatus::Trial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_trial_is_trial() {
        assert!(TenantStatus::Trial.is_trial());
        assert!(!TenantStatus::Active.is_trial());
        assert!(!TenantStatus::PastDue.is_trial());
        assert!(!TenantStatus::Suspended.is_trial());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TenantStatus::PastDue).unwrap();
        assert_eq!(json, "\"past_due\"");
    }

    #[test]
    fn status_deserializes_from_snake_case() {
        let status: TenantStatus = serde_json::from_str("\"suspended\"").unwrap();
        assert_eq!(status, TenantStatus::Suspended);
    }
}
