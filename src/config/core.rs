use serde::{Deserialize, Serialize};

use super::pricing::PricingConfig;

/// Root configuration structure for toolcompare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToolCompareConfig {
    /// Pricing estimator constants
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Catalog normalizer options
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// Catalog normalizer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NormalizerConfig {
    /// Map raw category labels onto the canonical category names
    #[serde(default)]
    pub canonicalize_categories: bool,
}
