use anyhow::Result;
use std::path::PathBuf;

use super::{open_catalog, resolve_config};
use crate::filtering::{
    categories, query_with_metrics, sort_by, FilterCriteria, PriceRange, SortDirection, SortField,
};
use crate::io::{create_writer, OutputFormat, QueryReport};

pub struct QueryConfig {
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    pub criteria: FilterCriteria,
    pub sort: Option<(SortField, SortDirection)>,
    pub list_categories: bool,
    pub format: OutputFormat,
}

/// Assemble criteria from individual command-line filters.
///
/// A price range is set when either bound is given; a missing minimum is
/// zero and a missing maximum is unbounded.
pub fn build_criteria(
    text: Option<String>,
    category: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
    required_features: Vec<String>,
    has_free_trial: Option<bool>,
) -> FilterCriteria {
    let price_range = match (min_price, max_price) {
        (None, None) => None,
        (min, max) => Some(PriceRange::new(min.unwrap_or(0.0), max)),
    };

    FilterCriteria {
        text,
        category,
        price_range,
        min_rating,
        required_features,
        has_free_trial,
    }
}

pub fn query_catalog(config: QueryConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let loaded = open_catalog(&config.catalog, &settings)?;
    let snapshot = &loaded.snapshot;

    if config.list_categories {
        let names = categories(snapshot.tools());
        match config.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
            _ => names.iter().for_each(|name| println!("{name}")),
        }
        return Ok(());
    }

    let result = query_with_metrics(snapshot.tools(), &config.criteria)?;
    let mut tools = result.tools;
    if let Some((field, direction)) = config.sort {
        sort_by(&mut tools, field, direction);
    }

    let report = QueryReport {
        snapshot: snapshot.id(),
        tools,
        metrics: result.metrics,
    };
    create_writer(config.format).write_query(&report)
}
