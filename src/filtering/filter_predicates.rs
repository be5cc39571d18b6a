//! Pure predicates for filtering tool records.
//!
//! Each predicate checks one constraint and takes the tool plus the
//! constraint value, so they can be tested and combined in isolation.

use crate::core::ToolRecord;
use crate::filtering::criteria::PriceRange;
use crate::pricing::entry_price;

/// Case-insensitive substring match against name or description.
#[inline]
pub fn matches_text(tool: &ToolRecord, text: &str) -> bool {
    let needle = text.to_lowercase();
    tool.name.to_lowercase().contains(&needle) || tool.description.to_lowercase().contains(&needle)
}

#[inline]
pub fn matches_category(tool: &ToolRecord, category: &str) -> bool {
    tool.category == category
}

/// Entry-plan price within the range. Custom pricing passes only when the
/// range has no upper bound.
#[inline]
pub fn within_price_range(tool: &ToolRecord, range: &PriceRange) -> bool {
    match entry_price(tool) {
        Some(price) => range.contains(price),
        None => range.max.is_none(),
    }
}

#[inline]
pub fn meets_min_rating(tool: &ToolRecord, min_rating: f64) -> bool {
    tool.rating >= min_rating
}

/// Every required string must appear inside some feature name.
pub fn has_required_features(tool: &ToolRecord, required: &[String]) -> bool {
    let features: Vec<String> = tool.all_features().map(str::to_lowercase).collect();
    required.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        features.iter().any(|feature| feature.contains(&wanted))
    })
}

#[inline]
pub fn matches_free_trial(tool: &ToolRecord, has_free_trial: bool) -> bool {
    tool.free_trial == has_free_trial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Plan, ToolFeatures};

    fn create_test_tool(price: Option<f64>) -> ToolRecord {
        ToolRecord {
            id: "writer".into(),
            name: "Writer Pro".into(),
            vendor: "Acme".into(),
            description: "AI copywriting assistant".into(),
            category: "Content Creation".into(),
            features: ToolFeatures {
                core: vec!["Blog Writing".into()],
                advanced: vec!["Brand Voice".into()],
                integrations: vec!["Google Docs".into()],
            },
            pricing_plans: vec![Plan::new("Starter", price)],
            rating: 4.3,
            review_count: 120,
            free_trial: true,
            pros: vec![],
            cons: vec![],
            official_url: String::new(),
            affiliate_url: None,
        }
    }

    #[test]
    fn text_matches_name_or_description_ignoring_case() {
        let tool = create_test_tool(Some(10.0));
        assert!(matches_text(&tool, "writer"));
        assert!(matches_text(&tool, "COPYWRITING"));
        assert!(!matches_text(&tool, "video"));
    }

    #[test]
    fn category_is_exact() {
        let tool = create_test_tool(Some(10.0));
        assert!(matches_category(&tool, "Content Creation"));
        assert!(!matches_category(&tool, "content creation"));
        assert!(!matches_category(&tool, "Content"));
    }

    #[test]
    fn price_range_handles_custom_pricing() {
        let custom = create_test_tool(None);
        assert!(within_price_range(&custom, &PriceRange::at_least(0.0)));
        assert!(!within_price_range(&custom, &PriceRange::at_most(1_000.0)));

        let paid = create_test_tool(Some(29.0));
        assert!(within_price_range(&paid, &PriceRange::new(29.0, Some(29.0))));
        assert!(!within_price_range(&paid, &PriceRange::at_most(28.99)));
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        let tool = create_test_tool(Some(0.0));
        assert!(meets_min_rating(&tool, 4.3));
        assert!(!meets_min_rating(&tool, 4.31));
    }

    #[test]
    fn required_features_are_substrings_across_groups() {
        let tool = create_test_tool(Some(0.0));
        assert!(has_required_features(&tool, &[]));
        assert!(has_required_features(&tool, &["blog".into(), "docs".into()]));
        assert!(has_required_features(&tool, &["voice".into()]));
        assert!(!has_required_features(&tool, &["blog".into(), "seo".into()]));
    }

    #[test]
    fn free_trial_must_match() {
        let tool = create_test_tool(Some(0.0));
        assert!(matches_free_trial(&tool, true));
        assert!(!matches_free_trial(&tool, false));
    }
}
