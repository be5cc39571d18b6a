use anyhow::{bail, Result};
use std::path::PathBuf;

use super::{open_catalog, resolve_config};
use crate::comparison::{round_robin, AttributeSelection};
use crate::io::{create_writer, ComparisonReport, OutputFormat, StandingsReport};

pub struct CompareConfig {
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    pub tools: Vec<String>,
    pub show_all: bool,
    pub format: OutputFormat,
}

/// Two ids produce a comparison table; more produce round-robin standings.
pub fn compare_tools(config: CompareConfig) -> Result<()> {
    let settings = resolve_config(config.config.as_deref())?;
    let loaded = open_catalog(&config.catalog, &settings)?;
    let snapshot = &loaded.snapshot;
    let mut writer = create_writer(config.format);

    match config.tools.as_slice() {
        [] | [_] => bail!("Comparison needs at least two tool ids"),
        [a, b] => {
            let comparison = snapshot.compare_standard(a, b)?;
            writer.write_comparison(&ComparisonReport::new(&comparison, config.show_all))
        }
        ids => {
            let tools = snapshot.select(ids)?;
            let standings = round_robin(&tools, &AttributeSelection::Standard);
            writer.write_standings(&StandingsReport {
                snapshot: snapshot.id(),
                standings,
            })
        }
    }
}
