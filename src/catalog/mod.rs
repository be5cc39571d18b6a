//! Catalog normalization and snapshots.
//!
//! Raw records from either pricing schema enter through `normalize` (or
//! `normalize_values` for untyped JSON) and come out as canonical
//! `ToolRecord`s. A `CatalogSnapshot` freezes one normalized batch under a
//! content-derived id.

pub mod categories;
pub mod identity;
pub mod normalizer;
pub mod price_text;
pub mod raw;
pub mod snapshot;

pub use categories::canonical_category;
pub use identity::slugify;
pub use normalizer::{normalize, normalize_values, DroppedRecord, NormalizedCatalog, Normalizer};
pub use price_text::parse_price_text;
pub use raw::{PricingSchema, RawRecord};
pub use snapshot::{CatalogSnapshot, SnapshotComparison, SnapshotId};
