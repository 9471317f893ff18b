//! Tenant-specific entitlement overrides.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{EntitlementValue, FeatureKey};

/// An explicit, possibly time-limited exception to a tenant's
/// plan-derived entitlement.
///
/// At most one override is active per feature key; writing a new one
/// replaces the previous (last write wins). An expired override is inert
/// but never evicted in the background - expiry is checked lazily on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantOverride {
    /// The feature this override applies to.
    pub feature: FeatureKey,
    /// The value resolution returns while the override is active.
    pub value: EntitlementValue,
    /// Optional expiry. None = never expires.
    pub expires_at: Option<Timestamp>,
}

impl TenantOverride {
    /// Creates an override.
    pub fn new(
        feature: FeatureKey,
        value: impl Into<EntitlementValue>,
        expires_at: Option<Timestamp>,
    ) -> Self {
        Self {
            feature,
            value: value.into(),
            expires_at,
        }
    }

    /// Whether the override still applies at the given instant.
    ///
    /// An override with no expiry is always active; one with an expiry
    /// is active strictly before that instant.
    pub fn is_active(&self, now: &Timestamp) -> bool {
        match &self.expires_at {
            None => true,
            Some(expires_at) => now.is_before(expires_at),
        }
    }
}
