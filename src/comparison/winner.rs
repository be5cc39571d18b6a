use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::core::ToolRecord;
use crate::pricing::entry_price;

/// Outcome of comparing one attribute of two tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    Tie,
}

impl Winner {
    /// `Greater` means the first tool wins.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::A,
            Ordering::Less => Self::B,
            Ordering::Equal => Self::Tie,
        }
    }

    pub fn higher<T: PartialOrd>(a: T, b: T) -> Self {
        Self::from_ordering(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
    }

    pub fn lower<T: PartialOrd>(a: T, b: T) -> Self {
        Self::higher(b, a)
    }

    /// The same outcome seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
            Self::Tie => Self::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountField {
    Pros,
    Cons,
}

/// An attribute two tools can be compared on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AttributeKind {
    /// Entry-plan price; lower wins
    Price,
    /// Exact, case-sensitive feature name
    FeaturePresence(String),
    /// More pros wins, fewer cons wins
    CountMetric(CountField),
    Rating,
    ReviewCount,
}

impl AttributeKind {
    pub fn feature(name: impl Into<String>) -> Self {
        Self::FeaturePresence(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Price => "Starting Price",
            Self::FeaturePresence(name) => name.as_str(),
            Self::CountMetric(CountField::Pros) => "Pros",
            Self::CountMetric(CountField::Cons) => "Cons",
            Self::Rating => "User Rating",
            Self::ReviewCount => "Reviews",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decide which tool wins on `attribute`.
///
/// Price ties when either side is custom-priced.
pub fn compare_attribute(attribute: &AttributeKind, a: &ToolRecord, b: &ToolRecord) -> Winner {
    match attribute {
        AttributeKind::Price => match (entry_price(a), entry_price(b)) {
            (Some(price_a), Some(price_b)) => Winner::lower(price_a, price_b),
            _ => Winner::Tie,
        },
        AttributeKind::FeaturePresence(name) => Winner::higher(a.has_feature(name), b.has_feature(name)),
        AttributeKind::CountMetric(CountField::Pros) => Winner::higher(a.pros.len(), b.pros.len()),
        AttributeKind::CountMetric(CountField::Cons) => Winner::lower(a.cons.len(), b.cons.len()),
        AttributeKind::Rating => Winner::higher(a.rating, b.rating),
        AttributeKind::ReviewCount => Winner::higher(a.review_count, b.review_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Plan, ToolFeatures};

    fn tool(price: Option<f64>, rating: f64) -> ToolRecord {
        ToolRecord {
            id: "t".into(),
            name: "T".into(),
            vendor: String::new(),
            description: String::new(),
            category: "other".into(),
            features: ToolFeatures::default(),
            pricing_plans: vec![Plan::new("Entry", price)],
            rating,
            review_count: 10,
            free_trial: false,
            pros: vec!["fast".into()],
            cons: vec![],
            official_url: String::new(),
            affiliate_url: None,
        }
    }

    #[test]
    fn lower_price_wins() {
        let cheap = tool(Some(10.0), 4.0);
        let pricey = tool(Some(30.0), 4.0);
        assert_eq!(compare_attribute(&AttributeKind::Price, &cheap, &pricey), Winner::A);
        assert_eq!(compare_attribute(&AttributeKind::Price, &pricey, &cheap), Winner::B);
    }

    #[test]
    fn custom_price_ties() {
        let custom = tool(None, 4.0);
        let free = tool(Some(0.0), 4.0);
        assert_eq!(compare_attribute(&AttributeKind::Price, &custom, &free), Winner::Tie);
        assert_eq!(compare_attribute(&AttributeKind::Price, &free, &custom), Winner::Tie);
    }

    #[test]
    fn feature_holder_wins() {
        let mut with = tool(None, 4.0);
        with.features.advanced.push("API Access".into());
        let without = tool(None, 4.0);

        let api = AttributeKind::feature("API Access");
        assert_eq!(compare_attribute(&api, &with, &without), Winner::A);
        assert_eq!(compare_attribute(&api, &without, &with), Winner::B);
        assert_eq!(compare_attribute(&api, &with, &with), Winner::Tie);
        assert_eq!(
            compare_attribute(&AttributeKind::feature("api access"), &with, &without),
            Winner::Tie
        );
    }

    #[test]
    fn fewer_cons_wins() {
        let mut a = tool(None, 4.0);
        a.cons = vec!["one".into()];
        let mut b = tool(None, 4.0);
        b.cons = vec!["one".into(), "two".into(), "three".into()];

        let cons = AttributeKind::CountMetric(CountField::Cons);
        assert_eq!(compare_attribute(&cons, &a, &b), Winner::A);

        let pros = AttributeKind::CountMetric(CountField::Pros);
        b.pros.push("cheap".into());
        assert_eq!(compare_attribute(&pros, &a, &b), Winner::B);
    }

    #[test]
    fn rating_and_reviews_higher_wins() {
        let a = tool(None, 4.8);
        let mut b = tool(None, 4.2);
        b.review_count = 500;
        assert_eq!(compare_attribute(&AttributeKind::Rating, &a, &b), Winner::A);
        assert_eq!(compare_attribute(&AttributeKind::ReviewCount, &a, &b), Winner::B);
    }

    #[test]
    fn identical_tools_tie_everywhere() {
        let a = tool(Some(12.0), 4.5);
        for attribute in [
            AttributeKind::Price,
            AttributeKind::feature("anything"),
            AttributeKind::CountMetric(CountField::Pros),
            AttributeKind::CountMetric(CountField::Cons),
            AttributeKind::Rating,
            AttributeKind::ReviewCount,
        ] {
            assert_eq!(compare_attribute(&attribute, &a, &a.clone()), Winner::Tie);
        }
    }

    #[test]
    fn attribute_serializes_with_kind_tag() {
        let json = serde_json::to_value(AttributeKind::feature("SEO")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "featurePresence", "value": "SEO"}));
    }
}
