//! Raw tool record shapes as they arrive from catalog files.
//!
//! Two divergent schemas are in circulation:
//!
//! - **Flat**: `pricing: { monthly, yearly }` with a single price point
//! - **Planned**: `pricing: { plans: [...] }`, a bare `pricing: [...]` array,
//!   or a canonical `pricingPlans: [...]`
//!
//! Everything here is permissive: every field is optional and the common
//! spelling variants are accepted. Numeric fields also accept numeric
//! strings (`"rating": "4.7"`) and price text (`"price_per_month": "Custom"`);
//! a value that still does not parse reads as absent. Resolution into the
//! canonical record happens once, in the normalizer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::price_text::parse_price_text;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "toolName")]
    pub tool_name: Option<String>,
    pub vendor: Option<String>,
    pub developer: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub overview: Option<RawOverview>,
    pub features: Option<RawFeatures>,
    pub integrations: Option<Vec<String>>,
    pub pricing: Option<RawPricingField>,
    #[serde(alias = "pricingPlans")]
    pub pricing_plans: Option<Vec<RawPlan>>,
    #[serde(deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(alias = "reviewCount", deserialize_with = "lenient_count")]
    pub review_count: Option<u64>,
    #[serde(alias = "freeTrial")]
    pub free_trial: Option<bool>,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    #[serde(alias = "officialUrl")]
    pub official_url: Option<String>,
    pub website: Option<String>,
    #[serde(alias = "affiliateUrl", alias = "affiliate_url")]
    pub affiliate_link: Option<String>,
}

/// Nested descriptive block used by directory-style records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOverview {
    pub developer: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub integrations: Option<Vec<String>>,
}

/// Features come either grouped or as a flat list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFeatures {
    Grouped(RawFeatureGroups),
    Flat(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeatureGroups {
    pub core: Vec<String>,
    pub advanced: Vec<String>,
    pub integrations: Vec<String>,
}

/// `pricing` is an object in both main schemas and a bare plan array in
/// directory exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPricingField {
    Plans(Vec<RawPlan>),
    Object(RawPricing),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPricing {
    #[serde(deserialize_with = "lenient_price")]
    pub monthly: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub yearly: Option<f64>,
    pub plans: Option<Vec<RawPlan>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPlan {
    pub name: Option<String>,
    pub plan_name: Option<String>,
    pub plan: Option<String>,
    #[serde(
        alias = "monthlyPrice",
        alias = "monthly_price",
        deserialize_with = "lenient_price"
    )]
    pub price_per_month: Option<f64>,
    #[serde(alias = "yearlyPrice", deserialize_with = "lenient_price")]
    pub yearly_price: Option<f64>,
    /// Display price such as `"$29/month"`, `"Free"` or `"Custom"`.
    pub price: Option<RawPrice>,
    #[serde(alias = "featuresIncluded", alias = "features_included")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Amount(f64),
    Text(String),
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64))
}

/// Numbers pass through; strings are read as a bare number first, then as
/// display price text, so `"Custom"` becomes `None` and `"$29/mo"` `29`.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| number_from(v).or_else(|| v.as_str().and_then(parse_price_text))))
}

/// Which pricing schema a raw record follows.
///
/// Resolved once per record; nothing downstream of the normalizer sees
/// this distinction.
#[derive(Debug, Clone, Copy)]
pub enum PricingSchema<'a> {
    Flat {
        monthly: Option<f64>,
        yearly: Option<f64>,
    },
    Planned(&'a [RawPlan]),
}

impl RawRecord {
    /// A non-empty plan list anywhere selects the planned schema.
    pub fn pricing_schema(&self) -> PricingSchema<'_> {
        let plans = match &self.pricing {
            Some(RawPricingField::Plans(plans)) => Some(plans.as_slice()),
            Some(RawPricingField::Object(pricing)) => pricing.plans.as_deref(),
            None => None,
        }
        .filter(|plans| !plans.is_empty())
        .or_else(|| self.pricing_plans.as_deref().filter(|p| !p.is_empty()));

        match plans {
            Some(plans) => PricingSchema::Planned(plans),
            None => match &self.pricing {
                Some(RawPricingField::Object(pricing)) => PricingSchema::Flat {
                    monthly: pricing.monthly,
                    yearly: pricing.yearly,
                },
                _ => PricingSchema::Flat {
                    monthly: None,
                    yearly: None,
                },
            },
        }
    }
}
