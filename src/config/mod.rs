// Sub-modules
mod core;
mod loader;
pub mod pricing;

// Re-export pricing types
pub use pricing::{
    default_high_multiplier, default_low_multiplier, default_medium_multiplier,
    default_yearly_discount_rate, PricingConfig, UsageMultipliers, HIGH_MULTIPLIER_BOUNDS,
    MEDIUM_MULTIPLIER_BOUNDS, YEARLY_DISCOUNT_BOUNDS,
};

// Re-export core types
pub use self::core::{NormalizerConfig, ToolCompareConfig};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Default contents written by `toolcompare init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# toolcompare configuration

[pricing]
# Fraction taken off twelve monthly payments when billed yearly (0.10 - 0.20)
yearly_discount_rate = 0.17

[pricing.usage_multipliers]
low = 1.0
# 1.2 - 1.5
medium = 1.2
# 1.5 - 2.5
high = 1.5

[normalizer]
# Map raw category labels onto canonical category names
canonicalize_categories = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_file_matches_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config, ToolCompareConfig::default());
    }
}
