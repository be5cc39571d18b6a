#![allow(dead_code)]

use toolcompare::{Plan, ToolFeatures, ToolRecord};

/// Canonical record with a single entry plan.
pub fn tool(id: &str, price: Option<f64>, rating: f64) -> ToolRecord {
    tool_with_plans(id, &[price], rating)
}

/// Canonical record whose plans carry the given monthly prices in order.
pub fn tool_with_plans(id: &str, prices: &[Option<f64>], rating: f64) -> ToolRecord {
    ToolRecord {
        id: id.to_string(),
        name: id.to_string(),
        vendor: String::new(),
        description: String::new(),
        category: "other".to_string(),
        features: ToolFeatures::default(),
        pricing_plans: prices
            .iter()
            .enumerate()
            .map(|(i, price)| Plan::new(format!("Tier {}", i + 1), *price))
            .collect(),
        rating,
        review_count: 0,
        free_trial: false,
        pros: Vec::new(),
        cons: Vec::new(),
        official_url: String::new(),
        affiliate_url: None,
    }
}

pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}
