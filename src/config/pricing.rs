//! Pricing configuration for cost estimation
//!
//! This module contains the tunable constants used by the pricing
//! estimator:
//! - Usage multipliers per usage level
//! - Yearly billing discount rate
//!
//! Each value is bounded. Values outside the bounds are rejected by
//! `validate`, and the loader falls back to defaults.

use crate::pricing::UsageLevel;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed range for the medium usage multiplier.
pub const MEDIUM_MULTIPLIER_BOUNDS: RangeInclusive<f64> = 1.2..=1.5;

/// Allowed range for the high usage multiplier.
pub const HIGH_MULTIPLIER_BOUNDS: RangeInclusive<f64> = 1.5..=2.5;

/// Allowed range for the yearly discount rate.
pub const YEARLY_DISCOUNT_BOUNDS: RangeInclusive<f64> = 0.10..=0.20;

/// Pricing estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Per-level multipliers applied to the per-user base price
    #[serde(default)]
    pub usage_multipliers: UsageMultipliers,

    /// Fraction taken off twelve monthly payments when billed yearly
    #[serde(default = "default_yearly_discount_rate")]
    pub yearly_discount_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            usage_multipliers: UsageMultipliers::default(),
            yearly_discount_rate: default_yearly_discount_rate(),
        }
    }
}

impl PricingConfig {
    // Pure function: Validate the discount rate
    pub fn validate_discount(rate: f64) -> Result<(), String> {
        if YEARLY_DISCOUNT_BOUNDS.contains(&rate) {
            Ok(())
        } else {
            Err(format!(
                "yearly_discount_rate must be between {:.2} and {:.2}, got {}",
                YEARLY_DISCOUNT_BOUNDS.start(),
                YEARLY_DISCOUNT_BOUNDS.end(),
                rate
            ))
        }
    }

    /// Validate every pricing constant, collecting all problems.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = self
            .usage_multipliers
            .collect_validations()
            .into_iter()
            .filter_map(|result| result.err())
            .collect();

        if let Err(e) = Self::validate_discount(self.yearly_discount_rate) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Usage multiplier table
///
/// `low` is always 1.0; `medium` and `high` must sit inside their bounds
/// and the table must be strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageMultipliers {
    #[serde(default = "default_low_multiplier")]
    pub low: f64,

    #[serde(default = "default_medium_multiplier")]
    pub medium: f64,

    #[serde(default = "default_high_multiplier")]
    pub high: f64,
}

impl Default for UsageMultipliers {
    fn default() -> Self {
        Self {
            low: default_low_multiplier(),
            medium: default_medium_multiplier(),
            high: default_high_multiplier(),
        }
    }
}

impl UsageMultipliers {
    pub fn for_level(&self, level: UsageLevel) -> f64 {
        match level {
            UsageLevel::Low => self.low,
            UsageLevel::Medium => self.medium,
            UsageLevel::High => self.high,
        }
    }

    // Pure function: Check a single multiplier against its bounds
    fn validate_bounds(value: f64, bounds: &RangeInclusive<f64>, name: &str) -> Result<(), String> {
        if bounds.contains(&value) {
            Ok(())
        } else {
            Err(format!(
                "{} usage multiplier must be between {} and {}, got {}",
                name,
                bounds.start(),
                bounds.end(),
                value
            ))
        }
    }

    // Pure function: Collect all multiplier validations
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            if self.low == 1.0 {
                Ok(())
            } else {
                Err(format!("Low usage multiplier must be 1.0, got {}", self.low))
            },
            Self::validate_bounds(self.medium, &MEDIUM_MULTIPLIER_BOUNDS, "Medium"),
            Self::validate_bounds(self.high, &HIGH_MULTIPLIER_BOUNDS, "High"),
            if self.low < self.medium && self.medium < self.high {
                Ok(())
            } else {
                Err("Usage multipliers must be strictly increasing (low < medium < high)"
                    .to_string())
            },
        ]
    }
}

pub fn default_low_multiplier() -> f64 {
    1.0
}
pub fn default_medium_multiplier() -> f64 {
    1.2
}
pub fn default_high_multiplier() -> f64 {
    1.5
}
pub fn default_yearly_discount_rate() -> f64 {
    0.17
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn defaults_are_strictly_increasing() {
        let m = UsageMultipliers::default();
        assert!(m.for_level(UsageLevel::Low) < m.for_level(UsageLevel::Medium));
        assert!(m.for_level(UsageLevel::Medium) < m.for_level(UsageLevel::High));
    }

    #[test]
    fn out_of_bounds_values_are_all_reported() {
        let config = PricingConfig {
            usage_multipliers: UsageMultipliers {
                low: 1.0,
                medium: 1.1,
                high: 3.0,
            },
            yearly_discount_rate: 0.5,
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Medium"));
        assert!(errors[1].contains("High"));
        assert!(errors[2].contains("yearly_discount_rate"));
    }

    #[test]
    fn equal_medium_and_high_is_rejected() {
        let config = PricingConfig {
            usage_multipliers: UsageMultipliers {
                low: 1.0,
                medium: 1.5,
                high: 1.5,
            },
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("strictly increasing"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: PricingConfig = toml::from_str("yearly_discount_rate = 0.2").unwrap();
        assert_eq!(config.yearly_discount_rate, 0.2);
        assert_eq!(config.usage_multipliers, UsageMultipliers::default());
    }
}
