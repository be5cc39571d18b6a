use serde::Serialize;
use std::fmt;

use crate::comparison::winner::{AttributeKind, Winner};

/// Grouping used when rendering a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    Pricing,
    Features,
    Analysis,
    Reviews,
}

impl fmt::Display for RowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pricing => write!(f, "pricing"),
            Self::Features => write!(f, "features"),
            Self::Analysis => write!(f, "analysis"),
            Self::Reviews => write!(f, "reviews"),
        }
    }
}

/// The compared value of one attribute for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// `None` is custom pricing
    Price(Option<f64>),
    Present(bool),
    Count(usize),
    Rating(f64),
    Reviews(u64),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price(None) => write!(f, "Custom"),
            Self::Price(Some(price)) if *price == 0.0 => write!(f, "Free"),
            Self::Price(Some(price)) => write!(f, "${price:.2}/mo"),
            Self::Present(true) => write!(f, "Yes"),
            Self::Present(false) => write!(f, "No"),
            Self::Count(count) => write!(f, "{count}"),
            Self::Rating(rating) => write!(f, "{rating:.1}/5"),
            Self::Reviews(reviews) => write!(f, "{reviews}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub attribute: AttributeKind,
    pub value_a: AttributeValue,
    pub value_b: AttributeValue,
    pub winner: Winner,
    pub category: RowCategory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties: usize,
}

impl ComparisonSummary {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::A => self.wins_a += 1,
            Winner::B => self.wins_b += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    /// Whichever side won more rows.
    pub fn overall(&self) -> Winner {
        Winner::higher(self.wins_a, self.wins_b)
    }
}

/// Side-by-side comparison of two tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    pub tool_a: String,
    pub tool_b: String,
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

impl ComparisonTable {
    /// Rows where one tool wins outright.
    pub fn key_differences(&self) -> Vec<&ComparisonRow> {
        self.rows
            .iter()
            .filter(|row| row.winner != Winner::Tie)
            .collect()
    }

    pub fn rows_in(&self, category: RowCategory) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(move |row| row.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_for_display() {
        assert_eq!(AttributeValue::Price(None).to_string(), "Custom");
        assert_eq!(AttributeValue::Price(Some(0.0)).to_string(), "Free");
        assert_eq!(AttributeValue::Price(Some(29.0)).to_string(), "$29.00/mo");
        assert_eq!(AttributeValue::Present(true).to_string(), "Yes");
        assert_eq!(AttributeValue::Rating(4.3).to_string(), "4.3/5");
    }

    #[test]
    fn custom_price_serializes_as_null() {
        let json = serde_json::to_value(AttributeValue::Price(None)).unwrap();
        assert!(json.is_null());
    }

    #[test]
    fn summary_overall_winner() {
        let mut summary = ComparisonSummary::default();
        summary.record(Winner::A);
        summary.record(Winner::Tie);
        assert_eq!(summary.overall(), Winner::A);
        summary.record(Winner::B);
        assert_eq!(summary.overall(), Winner::Tie);
    }
}
