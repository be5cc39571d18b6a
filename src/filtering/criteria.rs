use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Inclusive bounds on the entry plan's monthly price.
///
/// An unbounded `max` also admits custom-priced tools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(0.0, Some(max))
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(min, None)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    fn validate(&self) -> Result<()> {
        ensure_bound("price range minimum", self.min)?;
        if let Some(max) = self.max {
            ensure_bound("price range maximum", max)?;
            if self.min > max {
                return Err(Error::invalid_criteria(format!(
                    "price range minimum {} exceeds maximum {}",
                    self.min, max
                )));
            }
        }
        Ok(())
    }
}

/// Constraints for a catalog query. Every field is optional; an absent
/// field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of name or description
    pub text: Option<String>,
    /// Exact category label
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    /// Each entry must be a case-insensitive substring of some feature
    pub required_features: Vec<String>,
    pub has_free_trial: Option<bool>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn require_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_features.push(feature.into());
        self
    }

    pub fn with_free_trial(mut self, has_free_trial: bool) -> Self {
        self.has_free_trial = Some(has_free_trial);
        self
    }

    /// Check numeric constraints before any tool is examined.
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = &self.price_range {
            range.validate()?;
        }
        if let Some(rating) = self.min_rating {
            ensure_bound("minimum rating", rating)?;
        }
        Ok(())
    }

    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }
}

fn ensure_bound(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_criteria(format!("{label} must be finite")));
    }
    if value < 0.0 {
        return Err(Error::invalid_criteria(format!(
            "{label} must not be negative, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_is_valid_and_unconstrained() {
        let criteria = FilterCriteria::new();
        assert!(criteria.validate().is_ok());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let criteria = FilterCriteria::new().with_price_range(PriceRange::new(50.0, Some(10.0)));
        assert!(matches!(criteria.validate(), Err(Error::InvalidCriteria(_))));
    }

    #[test]
    fn negative_and_non_finite_bounds_are_rejected() {
        for criteria in [
            FilterCriteria::new().with_price_range(PriceRange::at_least(-1.0)),
            FilterCriteria::new().with_price_range(PriceRange::at_most(f64::INFINITY)),
            FilterCriteria::new().with_min_rating(-0.5),
            FilterCriteria::new().with_min_rating(f64::NAN),
        ] {
            assert!(
                matches!(criteria.validate(), Err(Error::InvalidCriteria(_))),
                "{criteria:?} should be invalid"
            );
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = PriceRange::new(10.0, Some(20.0));
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(PriceRange::at_least(5.0).contains(1_000_000.0));
    }

    #[test]
    fn deserializes_camel_case() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"minRating": 4.0, "priceRange": {"max": 30}, "requiredFeatures": ["api"]}"#,
        )
        .unwrap();
        assert_eq!(criteria.min_rating, Some(4.0));
        assert_eq!(criteria.price_range, Some(PriceRange::at_most(30.0)));
        assert_eq!(criteria.required_features, vec!["api".to_string()]);
    }
}
