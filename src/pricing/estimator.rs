use crate::config::PricingConfig;
use crate::core::{Error, Plan, Result, ToolRecord};
use crate::pricing::effective_price::{effective_price, entry_price};
use crate::pricing::models::{BillingCycle, EstimateParams, PricingEstimate};
use crate::pricing::ranking::{sort_by_display_price, RankedEstimate};

/// Team size above which the top tier is assumed.
const LARGE_TEAM: u32 = 10;

/// Plan name reported when a tool has no plans at all.
const CUSTOM_PLAN: &str = "Custom";

/// Computes team cost estimates from a tool's plan list.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    pricing: PricingConfig,
}

impl Estimator {
    /// Create an estimator from an already validated pricing table.
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    /// Create an estimator, rejecting constants outside their bounds.
    pub fn try_new(pricing: PricingConfig) -> Result<Self> {
        pricing
            .validate()
            .map_err(|errors| Error::Configuration(errors.join("; ")))?;
        Ok(Self::new(pricing))
    }

    pub fn config(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Estimate the cost of `tool` for the given team.
    ///
    /// Larger teams are priced on higher tiers. A tool whose entry plan is
    /// custom-priced is treated as contact-sales throughout, so every price
    /// in the result is `None`.
    pub fn estimate(&self, tool: &ToolRecord, params: &EstimateParams) -> Result<PricingEstimate> {
        params.validate()?;

        let plan = select_plan(&tool.pricing_plans, params.team_size);
        let base_price_per_user = entry_price(tool).and(plan.and_then(effective_price));
        let usage_multiplier = self
            .pricing
            .usage_multipliers
            .for_level(params.usage_level);
        let team_size = f64::from(params.team_size);
        let discount = self.pricing.yearly_discount_rate;

        let total_monthly_price = base_price_per_user.map(|base| base * usage_multiplier * team_size);
        let total_yearly_price = total_monthly_price.map(|monthly| monthly * 12.0 * (1.0 - discount));
        let savings = total_monthly_price
            .zip(total_yearly_price)
            .map(|(monthly, yearly)| monthly * 12.0 - yearly);
        let display_price = match params.billing_cycle {
            BillingCycle::Yearly => total_yearly_price.map(|yearly| yearly / 12.0),
            BillingCycle::Monthly => total_monthly_price,
        };

        Ok(PricingEstimate {
            tool_id: tool.id.clone(),
            plan_name: plan.map_or_else(|| CUSTOM_PLAN.to_string(), |plan| plan.name.clone()),
            base_price_per_user,
            usage_multiplier,
            team_size: params.team_size,
            total_monthly_price,
            total_yearly_price,
            savings,
            display_price,
            billing_cycle: params.billing_cycle,
            usage_note: params.usage_level.note().to_string(),
        })
    }

    /// Estimate every tool and order by display price, custom pricing last.
    pub fn rank<'a, I>(&self, tools: I, params: &EstimateParams) -> Result<Vec<RankedEstimate<'a>>>
    where
        I: IntoIterator<Item = &'a ToolRecord>,
    {
        params.validate()?;

        let mut ranked = tools
            .into_iter()
            .map(|tool| {
                self.estimate(tool, params)
                    .map(|estimate| RankedEstimate { tool, estimate })
            })
            .collect::<Result<Vec<_>>>()?;

        sort_by_display_price(&mut ranked);
        Ok(ranked)
    }
}

/// Pick the plan a team of `team_size` would most likely buy.
///
/// Teams above ten take the last plan when there are at least three; any
/// team above one takes the second plan when there are at least two;
/// otherwise the entry plan. `None` only when there are no plans.
pub fn select_plan(plans: &[Plan], team_size: u32) -> Option<&Plan> {
    let index = if team_size > LARGE_TEAM && plans.len() >= 3 {
        plans.len() - 1
    } else if team_size > 1 && plans.len() >= 2 {
        1
    } else {
        0
    };
    plans.get(index)
}

/// Estimate with the default pricing table.
pub fn estimate(tool: &ToolRecord, params: &EstimateParams) -> Result<PricingEstimate> {
    Estimator::default().estimate(tool, params)
}

/// Rank with the default pricing table.
pub fn rank<'a, I>(tools: I, params: &EstimateParams) -> Result<Vec<RankedEstimate<'a>>>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    Estimator::default().rank(tools, params)
}
