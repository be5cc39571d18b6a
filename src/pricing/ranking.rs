use serde::Serialize;
use std::cmp::Ordering;

use crate::core::ToolRecord;
use crate::pricing::models::PricingEstimate;

/// A tool paired with its estimate.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEstimate<'a> {
    pub tool: &'a ToolRecord,
    pub estimate: PricingEstimate,
}

/// Ascending price order where `None` (custom pricing) sorts after every
/// numeric price.
pub fn compare_prices(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, cheapest first.
pub fn sort_by_display_price(ranked: &mut [RankedEstimate<'_>]) {
    ranked.sort_by(|a, b| compare_prices(a.estimate.display_price, b.estimate.display_price));
}

/// Absolute gap between two estimates' display prices.
///
/// `None` when either side is custom-priced.
pub fn cost_difference(a: &PricingEstimate, b: &PricingEstimate) -> Option<f64> {
    a.display_price
        .zip(b.display_price)
        .map(|(x, y)| (x - y).abs())
}
