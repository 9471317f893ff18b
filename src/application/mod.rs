//! Application layer: the tenant session facade.

mod session;

pub use session::{FeatureGate, TenantSession, UsageMeterReading};
