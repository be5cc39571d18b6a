//! CLI command implementations.
//!
//! Each submodule handles one subcommand with its configuration and
//! execution logic:
//! - **query**: filter, sort and list catalog tools
//! - **compare**: side-by-side table for two tools, standings for more
//! - **estimate**: team cost estimates ranked by price
//! - **init**: write a default configuration file

pub mod compare;
pub mod estimate;
pub mod init;
pub mod query;

pub use compare::{compare_tools, CompareConfig};
pub use estimate::{estimate_costs, EstimateConfig};
pub use init::init_config;
pub use query::{query_catalog, QueryConfig};

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::Normalizer;
use crate::config::{load_config, load_config_from_path, ToolCompareConfig};
use crate::io::{load_snapshot, LoadedCatalog};

/// Use the explicit config file when given, otherwise search upward from
/// the working directory.
pub fn resolve_config(path: Option<&Path>) -> Result<ToolCompareConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Load and normalize a catalog, warning about every dropped record.
pub fn open_catalog(catalog: &Path, config: &ToolCompareConfig) -> Result<LoadedCatalog> {
    let normalizer = Normalizer::new(config.normalizer.clone());
    let loaded = load_snapshot(catalog, &normalizer)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;

    for dropped in &loaded.dropped {
        log::warn!("Skipped record {}: {}", dropped.index, dropped.reason);
    }

    Ok(loaded)
}
