//! Catalog queries with metrics on what was filtered and why.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::{Result, ToolRecord};
use crate::filtering::criteria::FilterCriteria;
use crate::filtering::filter_predicates::{
    has_required_features, matches_category, matches_free_trial, matches_text, meets_min_rating,
    within_price_range,
};

/// Counts of tools rejected per constraint. A tool is attributed to the
/// first constraint it fails, in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterMetrics {
    pub total_tools: usize,
    pub filtered_by_text: usize,
    pub filtered_by_category: usize,
    pub filtered_by_price: usize,
    pub filtered_by_rating: usize,
    pub filtered_by_features: usize,
    pub filtered_by_free_trial: usize,
    pub included: usize,
}

impl FilterMetrics {
    pub fn new(total: usize) -> Self {
        Self {
            total_tools: total,
            ..Self::default()
        }
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered_by_text
            + self.filtered_by_category
            + self.filtered_by_price
            + self.filtered_by_rating
            + self.filtered_by_features
            + self.filtered_by_free_trial
    }

    /// Percentage of tools that passed every constraint.
    pub fn inclusion_rate(&self) -> f64 {
        if self.total_tools == 0 {
            return 0.0;
        }
        (self.included as f64 / self.total_tools as f64) * 100.0
    }

    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Text => self.filtered_by_text += 1,
            Rejection::Category => self.filtered_by_category += 1,
            Rejection::Price => self.filtered_by_price += 1,
            Rejection::Rating => self.filtered_by_rating += 1,
            Rejection::Features => self.filtered_by_features += 1,
            Rejection::FreeTrial => self.filtered_by_free_trial += 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rejection {
    Text,
    Category,
    Price,
    Rating,
    Features,
    FreeTrial,
}

/// Matching tools, in catalog order, together with filter metrics.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult<'a> {
    pub tools: Vec<&'a ToolRecord>,
    pub metrics: FilterMetrics,
}

/// Tools matching every constraint, in catalog order.
pub fn query<'a>(catalog: &'a [ToolRecord], criteria: &FilterCriteria) -> Result<Vec<&'a ToolRecord>> {
    query_with_metrics(catalog, criteria).map(|result| result.tools)
}

/// Like [`query`], also reporting why tools were excluded.
pub fn query_with_metrics<'a>(
    catalog: &'a [ToolRecord],
    criteria: &FilterCriteria,
) -> Result<FilterResult<'a>> {
    criteria.validate()?;

    let mut metrics = FilterMetrics::new(catalog.len());
    let tools: Vec<&ToolRecord> = catalog
        .iter()
        .filter_map(|tool| match first_rejection(tool, criteria) {
            Some(rejection) => {
                metrics.record(rejection);
                None
            }
            None => Some(tool),
        })
        .collect();
    metrics.included = tools.len();

    log::debug!(
        "query kept {} of {} tools ({:.1}%)",
        metrics.included,
        metrics.total_tools,
        metrics.inclusion_rate()
    );

    Ok(FilterResult { tools, metrics })
}

fn first_rejection(tool: &ToolRecord, criteria: &FilterCriteria) -> Option<Rejection> {
    if let Some(text) = &criteria.text {
        if !matches_text(tool, text) {
            return Some(Rejection::Text);
        }
    }
    if let Some(category) = &criteria.category {
        if !matches_category(tool, category) {
            return Some(Rejection::Category);
        }
    }
    if let Some(range) = &criteria.price_range {
        if !within_price_range(tool, range) {
            return Some(Rejection::Price);
        }
    }
    if let Some(min_rating) = criteria.min_rating {
        if !meets_min_rating(tool, min_rating) {
            return Some(Rejection::Rating);
        }
    }
    if !has_required_features(tool, &criteria.required_features) {
        return Some(Rejection::Features);
    }
    if let Some(has_free_trial) = criteria.has_free_trial {
        if !matches_free_trial(tool, has_free_trial) {
            return Some(Rejection::FreeTrial);
        }
    }
    None
}

/// Sorted, de-duplicated category labels present in the catalog.
pub fn categories(catalog: &[ToolRecord]) -> Vec<&str> {
    catalog
        .iter()
        .map(|tool| tool.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
