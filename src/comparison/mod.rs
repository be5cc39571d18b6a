//! Side-by-side tool comparison.
//!
//! Each attribute resolves to a winner (A, B or tie). A table collects one
//! row per attribute and a win tally; the caller chooses the attributes.

pub mod comparator;
pub mod round_robin;
pub mod types;
pub mod winner;

pub use comparator::{attribute_value, compare_tools, standard_attributes, Comparator};
pub use round_robin::{round_robin, AttributeSelection, Standing};
pub use types::{AttributeValue, ComparisonRow, ComparisonSummary, ComparisonTable, RowCategory};
pub use winner::{compare_attribute, AttributeKind, CountField, Winner};
