// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod filtering;
pub mod io;
pub mod pricing;

// Re-export commonly used types
pub use crate::core::{Error, MalformedReason, Plan, Result, ToolFeatures, ToolRecord};

pub use crate::catalog::{
    normalize, normalize_values, CatalogSnapshot, DroppedRecord, NormalizedCatalog, Normalizer,
    RawRecord, SnapshotComparison, SnapshotId,
};

pub use crate::filtering::{
    categories, query, query_with_metrics, sort_by, FilterCriteria, FilterMetrics, PriceRange,
    SortDirection, SortField,
};

pub use crate::comparison::{
    compare_attribute, compare_tools, round_robin, standard_attributes, AttributeKind,
    AttributeSelection, ComparisonRow, ComparisonSummary, ComparisonTable, CountField, Standing,
    Winner,
};

pub use crate::pricing::{
    cost_difference, effective_price, estimate, rank, BillingCycle, EstimateParams, Estimator,
    PricingEstimate, RankedEstimate, UsageLevel,
};

pub use crate::config::{PricingConfig, ToolCompareConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
