use anyhow::Result;
use std::path::PathBuf;

use super::{open_catalog, resolve_config};
use crate::io::{create_writer, EstimateReport, OutputFormat};
use crate::pricing::{EstimateParams, Estimator};

pub struct EstimateConfig {
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    /// Empty means every tool in the catalog
    pub tools: Vec<String>,
    pub params: EstimateParams,
    pub format: OutputFormat,
}

pub fn estimate_costs(config: EstimateConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let loaded = open_catalog(&config.catalog, &settings)?;
    let snapshot = &loaded.snapshot;

    let estimator = Estimator::new(settings.pricing);
    let estimates = snapshot.rank(config.tools.as_slice(), &estimator, &config.params)?;

    create_writer(config.format).write_estimates(&EstimateReport {
        snapshot: snapshot.id(),
        params: config.params,
        estimates,
    })
}
