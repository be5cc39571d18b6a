pub mod errors;

pub use errors::{Error, MalformedReason, Result};

use serde::{Deserialize, Serialize};

/// Rating assigned to records that arrive without one.
pub const DEFAULT_RATING: f64 = 4.5;

/// Category assigned to records that arrive without one.
pub const DEFAULT_CATEGORY: &str = "other";

/// Canonical tool record produced by the catalog normalizer.
///
/// Every downstream component (filtering, comparison, pricing) reads
/// only this shape. Records are immutable once built; derived views are
/// fresh computations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub description: String,
    pub category: String,
    pub features: ToolFeatures,
    /// Ascending-capability order; index 0 is the entry plan. Never empty.
    pub pricing_plans: Vec<Plan>,
    pub rating: f64,
    pub review_count: u64,
    pub free_trial: bool,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub official_url: String,
    pub affiliate_url: Option<String>,
}

impl ToolRecord {
    /// The lowest-tier plan.
    ///
    /// Normalized records always have one. A hand-built record with no
    /// plans has no entry plan and reads as custom-priced everywhere.
    pub fn entry_plan(&self) -> Option<&Plan> {
        self.pricing_plans.first()
    }

    /// Iterate the union of core, advanced and integration features.
    pub fn all_features(&self) -> impl Iterator<Item = &str> {
        self.features.iter()
    }

    /// Case-sensitive exact membership in the combined feature set.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.all_features().any(|f| f == feature)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolFeatures {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
}

impl ToolFeatures {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.core
            .iter()
            .chain(self.advanced.iter())
            .chain(self.integrations.iter())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.advanced.is_empty() && self.integrations.is_empty()
    }
}

/// A single pricing tier. `None` prices mean "custom / contact sales".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    pub monthly_price: Option<f64>,
    pub yearly_price: Option<f64>,
    #[serde(default)]
    pub features_included: Vec<String>,
}

impl Plan {
    pub fn new(name: impl Into<String>, monthly_price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            monthly_price,
            yearly_price: None,
            features_included: Vec::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.monthly_price.is_none()
    }
}
