//! Catalog search and filtering.
//!
//! Queries preserve catalog order; sorting is a separate, explicit step.

pub mod criteria;
pub mod filter_predicates;
pub mod query;
pub mod sort;

pub use criteria::{FilterCriteria, PriceRange};
pub use query::{categories, query, query_with_metrics, FilterMetrics, FilterResult};
pub use sort::{sort_by, SortDirection, SortField};
