//! Team cost estimation.
//!
//! Plan choice depends on team size, usage scales the per-user price, and
//! yearly billing applies a flat discount. Custom-priced tools stay `None`
//! end to end.

pub mod effective_price;
pub mod estimator;
pub mod models;
pub mod ranking;

pub use effective_price::{effective_price, entry_price};
pub use estimator::{estimate, rank, select_plan, Estimator};
pub use models::{BillingCycle, EstimateParams, PricingEstimate, UsageLevel};
pub use ranking::{compare_prices, cost_difference, RankedEstimate};
