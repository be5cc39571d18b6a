pub mod catalog_loader;
pub mod output;

pub use catalog_loader::{load_catalog, load_snapshot, parse_catalog, LoadedCatalog};
pub use output::{
    create_writer, format_price, ComparisonReport, EstimateReport, JsonWriter, MarkdownWriter,
    OutputFormat, OutputWriter, QueryReport, StandingsReport, TerminalWriter,
};

use std::fs;
use std::path::Path;

use crate::core::Result;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
