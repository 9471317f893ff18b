//! Domain layer: plan entitlements, usage metering, shared value objects.

pub mod foundation;
pub mod plan;
pub mod usage;
