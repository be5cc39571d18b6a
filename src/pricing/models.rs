use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Error, Result};

/// How heavily a team expects to use a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Low,
    Medium,
    High,
}

impl UsageLevel {
    /// Classify an expected monthly request volume.
    ///
    /// More than 10,000 requests is high usage, more than 5,000 is medium.
    pub fn from_monthly_volume(requests: u64) -> Self {
        if requests > 10_000 {
            Self::High
        } else if requests > 5_000 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Short explanation shown next to an estimate.
    pub fn note(self) -> &'static str {
        match self {
            Self::Low => "Usage fits within standard plan limits",
            Self::Medium => "Medium usage included in plan",
            Self::High => "High usage may require additional credits",
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// Inputs to a cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateParams {
    pub team_size: u32,
    pub usage_level: UsageLevel,
    pub billing_cycle: BillingCycle,
}

impl EstimateParams {
    pub fn new(team_size: u32, usage_level: UsageLevel, billing_cycle: BillingCycle) -> Self {
        Self {
            team_size,
            usage_level,
            billing_cycle,
        }
    }

    /// Reject a team size below one.
    pub fn validate(&self) -> Result<()> {
        if self.team_size < 1 {
            return Err(Error::invalid_criteria(format!(
                "team size must be at least 1, got {}",
                self.team_size
            )));
        }
        Ok(())
    }
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self::new(1, UsageLevel::Low, BillingCycle::Monthly)
    }
}

/// Cost estimate for one tool.
///
/// Every price is `None` when the tool only has custom ("contact sales")
/// pricing. Callers render that case as text; it never becomes zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEstimate {
    pub tool_id: String,
    /// Plan the estimate was based on
    pub plan_name: String,
    pub base_price_per_user: Option<f64>,
    pub usage_multiplier: f64,
    pub team_size: u32,
    pub total_monthly_price: Option<f64>,
    /// Twelve months with the yearly discount applied
    pub total_yearly_price: Option<f64>,
    /// Twelve monthly payments minus the discounted yearly price
    pub savings: Option<f64>,
    /// Monthly figure for the chosen billing cycle
    pub display_price: Option<f64>,
    pub billing_cycle: BillingCycle,
    pub usage_note: String,
}

impl PricingEstimate {
    pub fn is_custom(&self) -> bool {
        self.display_price.is_none()
    }
}
