//! Plan tier definitions.
//!
//! Represents the subscription tiers available on the Flyn platform.

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
///
/// Tiers are ordered: Free < Starter < Growth < Pro < Enterprise.
/// The order matters for "minimum plan required" queries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanTier {
    /// Sandbox-only evaluation tier. All usage limits are zero.
    Free,

    /// First paid tier - live mode with core channels.
    Starter,

    /// Mid tier - automation, AI deployment, advanced telephony.
    Growth,

    /// Full-featured tier - all channels, white label, API keys.
    Pro,

    /// Custom-priced tier with effectively unbounded limits.
    Enterprise,
}

impl PlanTier {
    /// All tiers in ascending order.
    ///
    /// The required-plan scan walks this slice front to back.
    pub const ASCENDING: [PlanTier; 5] = [
        PlanTier::Free,
        PlanTier::Starter,
        PlanTier::Growth,
        PlanTier::Pro,
        PlanTier::Enterprise,
    ];

    /// Returns the numeric rank of this tier for comparison.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Free => 0,
            PlanTier::Starter => 1,
            PlanTier::Growth => 2,
            PlanTier::Pro => 3,
            PlanTier::Enterprise => 4,
        }
    }

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Starter => "Starter",
            PlanTier::Growth => "Growth",
            PlanTier::Pro => "Pro",
            PlanTier::Enterprise => "Enterprise",
        }
    }

    /// Returns the catalog metadata for this tier.
    pub fn info(&self) -> PlanInfo {
        match self {
            PlanTier::Free => PlanInfo {
                tier: *self,
                description: "Explore the platform in sandbox mode",
                monthly_price_usd: Some(0),
                billing_cycle: BillingCycle::Monthly,
                is_popular: false,
            },
            PlanTier::Starter => PlanInfo {
                tier: *self,
                description: "Go live with your first conversations",
                monthly_price_usd: Some(29),
                billing_cycle: BillingCycle::Monthly,
                is_popular: false,
            },
            PlanTier::Growth => PlanInfo {
                tier: *self,
                description: "Scale operations with automation & AI",
                monthly_price_usd: Some(99),
                billing_cycle: BillingCycle::Monthly,
                is_popular: true,
            },
            PlanTier::Pro => PlanInfo {
                tier: *self,
                description: "Full control with advanced features",
                monthly_price_usd: Some(249),
                billing_cycle: BillingCycle::Monthly,
                is_popular: false,
            },
            PlanTier::Enterprise => PlanInfo {
                tier: *self,
                description: "Mission-critical deployment",
                monthly_price_usd: None,
                billing_cycle: BillingCycle::Custom,
                is_popular: false,
            },
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a plan is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Custom,
}

/// Display metadata for a plan tier.
///
/// Pricing here is catalog information only; no payment processing
/// happens anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInfo {
    /// The tier this metadata describes.
    pub tier: PlanTier,
    /// Short marketing description.
    pub description: &'static str,
    /// Monthly price in whole USD. None = custom pricing.
    pub monthly_price_usd: Option<u32>,
    /// Billing cadence.
    pub billing_cycle: BillingCycle,
    /// Whether the tier is highlighted in plan pickers.
    pub is_popular: bool,
}
