//! The usable monthly price of a plan.

use crate::core::{Plan, ToolRecord};

/// Numeric monthly price of a plan.
///
/// Positive prices pass through, zero means free and stays `0`, and a
/// missing price means custom pricing and is `None`.
pub fn effective_price(plan: &Plan) -> Option<f64> {
    match plan.monthly_price {
        Some(price) if price > 0.0 => Some(price),
        Some(price) if price == 0.0 => Some(0.0),
        _ => None,
    }
}

/// Effective price of the tool's entry plan.
pub fn entry_price(tool: &ToolRecord) -> Option<f64> {
    tool.entry_plan().and_then(effective_price)
}
