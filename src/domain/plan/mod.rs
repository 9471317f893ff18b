//! Plan & entitlement domain module.
//!
//! Resolves whether a tenant may use a named feature, given plan tier,
//! tenant-specific overrides, and override expiry.
//!
//! # Module Structure
//!
//! - `tier` - PlanTier levels and catalog metadata
//! - `status` - TenantStatus account states
//! - `feature` - the closed FeatureKey catalog
//! - `entitlement` - EntitlementValue union and truthiness
//! - `catalog` - static per-tier entitlement tables
//! - `overrides` - TenantOverride exceptions
//! - `state` - the PlanState aggregate and resolution

pub mod catalog;
mod entitlement;
mod feature;
mod overrides;
mod state;
mod status;
mod tier;

pub use entitlement::EntitlementValue;
pub use feature::{FeatureKey, UnknownFeatureKey};
pub use overrides::TenantOverride;
pub use state::{PlanState, TRIAL_DAYS};
pub use status::TenantStatus;
pub use tier::{BillingCycle, PlanInfo, PlanTier};
