use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::ToolRecord;
use crate::pricing::{compare_prices, entry_price};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Rating,
    ReviewCount,
    Price,
    Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Stable in-place sort of query results.
///
/// Names and categories compare case-insensitively. Custom-priced tools go
/// last for a price sort whichever the direction.
pub fn sort_by(tools: &mut [&ToolRecord], field: SortField, direction: SortDirection) {
    tools.sort_by(|a, b| compare_tools(a, b, field, direction));
}

fn compare_tools(a: &ToolRecord, b: &ToolRecord, field: SortField, direction: SortDirection) -> Ordering {
    match field {
        SortField::Name => direction.apply(cmp_ignore_case(&a.name, &b.name)),
        SortField::Category => direction.apply(cmp_ignore_case(&a.category, &b.category)),
        SortField::Rating => direction.apply(a.rating.total_cmp(&b.rating)),
        SortField::ReviewCount => direction.apply(a.review_count.cmp(&b.review_count)),
        SortField::Price => match (entry_price(a), entry_price(b)) {
            (Some(x), Some(y)) => direction.apply(x.total_cmp(&y)),
            (x, y) => compare_prices(x, y),
        },
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
