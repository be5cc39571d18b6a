use std::collections::HashSet;

use crate::comparison::types::*;
use crate::comparison::winner::{compare_attribute, AttributeKind, CountField};
use crate::core::ToolRecord;
use crate::pricing::entry_price;

/// Compares two tools attribute by attribute.
pub struct Comparator<'a> {
    a: &'a ToolRecord,
    b: &'a ToolRecord,
}

impl<'a> Comparator<'a> {
    pub fn new(a: &'a ToolRecord, b: &'a ToolRecord) -> Self {
        Self { a, b }
    }

    /// Build one row per attribute, in the order given.
    pub fn compare(&self, attributes: &[AttributeKind]) -> ComparisonTable {
        let rows: Vec<ComparisonRow> = attributes
            .iter()
            .map(|attribute| self.build_row(attribute))
            .collect();
        let summary = self.generate_summary(&rows);

        log::debug!(
            "compared {} vs {} on {} attributes: {} / {} / {} ties",
            self.a.id,
            self.b.id,
            rows.len(),
            summary.wins_a,
            summary.wins_b,
            summary.ties
        );

        ComparisonTable {
            tool_a: self.a.id.clone(),
            tool_b: self.b.id.clone(),
            rows,
            summary,
        }
    }

    /// Compare on the attributes a full comparison page shows.
    pub fn compare_standard(&self) -> ComparisonTable {
        self.compare(&standard_attributes(self.a, self.b))
    }

    fn build_row(&self, attribute: &AttributeKind) -> ComparisonRow {
        ComparisonRow {
            attribute: attribute.clone(),
            value_a: attribute_value(attribute, self.a),
            value_b: attribute_value(attribute, self.b),
            winner: compare_attribute(attribute, self.a, self.b),
            category: row_category(attribute),
        }
    }

    fn generate_summary(&self, rows: &[ComparisonRow]) -> ComparisonSummary {
        rows.iter().fold(ComparisonSummary::default(), |mut summary, row| {
            summary.record(row.winner);
            summary
        })
    }
}

/// Compare two tools on the given attributes.
pub fn compare_tools(a: &ToolRecord, b: &ToolRecord, attributes: &[AttributeKind]) -> ComparisonTable {
    Comparator::new(a, b).compare(attributes)
}

/// Price, every feature either tool lists, then pros, cons, rating and
/// review count.
///
/// Features keep first-seen order: A's core, advanced and integrations,
/// then B's.
pub fn standard_attributes(a: &ToolRecord, b: &ToolRecord) -> Vec<AttributeKind> {
    let mut seen = HashSet::new();
    let features = a
        .all_features()
        .chain(b.all_features())
        .filter(|feature| seen.insert(*feature))
        .map(AttributeKind::feature);

    std::iter::once(AttributeKind::Price)
        .chain(features)
        .chain([
            AttributeKind::CountMetric(CountField::Pros),
            AttributeKind::CountMetric(CountField::Cons),
            AttributeKind::Rating,
            AttributeKind::ReviewCount,
        ])
        .collect()
}

/// The value compared for `attribute` on one tool.
pub fn attribute_value(attribute: &AttributeKind, tool: &ToolRecord) -> AttributeValue {
    match attribute {
        AttributeKind::Price => AttributeValue::Price(entry_price(tool)),
        AttributeKind::FeaturePresence(name) => AttributeValue::Present(tool.has_feature(name)),
        AttributeKind::CountMetric(CountField::Pros) => AttributeValue::Count(tool.pros.len()),
        AttributeKind::CountMetric(CountField::Cons) => AttributeValue::Count(tool.cons.len()),
        AttributeKind::Rating => AttributeValue::Rating(tool.rating),
        AttributeKind::ReviewCount => AttributeValue::Reviews(tool.review_count),
    }
}

fn row_category(attribute: &AttributeKind) -> RowCategory {
    match attribute {
        AttributeKind::Price => RowCategory::Pricing,
        AttributeKind::FeaturePresence(_) => RowCategory::Features,
        AttributeKind::CountMetric(_) => RowCategory::Analysis,
        AttributeKind::Rating | AttributeKind::ReviewCount => RowCategory::Reviews,
    }
}
