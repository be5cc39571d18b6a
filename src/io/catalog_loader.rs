//! Reading catalog documents from disk.

use serde_json::Value;
use std::path::Path;

use crate::catalog::{CatalogSnapshot, DroppedRecord, Normalizer};
use crate::core::{Error, Result};
use crate::io::read_file;

/// A snapshot built from a file, with the records that did not survive
/// normalization.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub snapshot: CatalogSnapshot,
    pub dropped: Vec<DroppedRecord>,
}

/// Split a catalog document into raw record values.
///
/// Accepts either a top-level array or an object with a `tools` array.
pub fn parse_catalog(content: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove("tools") {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(Error::Catalog("`tools` must be an array".to_string())),
            None => Err(Error::Catalog(
                "expected an array of tools or an object with a `tools` array".to_string(),
            )),
        },
        _ => Err(Error::Catalog(
            "expected an array of tools or an object with a `tools` array".to_string(),
        )),
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<Value>> {
    let content = read_file(path)?;
    let records = parse_catalog(&content)?;
    log::debug!("read {} raw records from {}", records.len(), path.display());
    Ok(records)
}

/// Read, normalize and freeze a catalog file.
pub fn load_snapshot(path: &Path, normalizer: &Normalizer) -> Result<LoadedCatalog> {
    let records = load_catalog(path)?;
    let normalized = normalizer.normalize_values(&records);
    let dropped = normalized.dropped.clone();
    let snapshot = CatalogSnapshot::from_normalized(normalized);
    log::info!(
        "loaded {} tools from {} (snapshot {})",
        snapshot.len(),
        path.display(),
        snapshot.id()
    );
    Ok(LoadedCatalog { snapshot, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizerConfig;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_top_level_array() {
        let records = parse_catalog(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parses_tools_wrapper() {
        let records = parse_catalog(r#"{"tools": [{"name": "A"}], "version": 2}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(parse_catalog(r#"{"items": []}"#), Err(Error::Catalog(_))));
        assert!(matches!(parse_catalog(r#"{"tools": {}}"#), Err(Error::Catalog(_))));
        assert!(matches!(parse_catalog("42"), Err(Error::Catalog(_))));
        assert!(matches!(parse_catalog("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_catalog(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_snapshot_reports_drops() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(
            &path,
            indoc! {r#"
                [
                    {"name": "Writer", "pricing": {"monthly": 12}},
                    {"description": "no identity"},
                    "not an object"
                ]
            "#},
        )
        .unwrap();

        let loaded = load_snapshot(&path, &Normalizer::new(NormalizerConfig::default())).unwrap();
        assert_eq!(loaded.snapshot.len(), 1);
        assert_eq!(loaded.dropped.len(), 2);
        assert_eq!(loaded.snapshot.tools()[0].id, "writer");
    }
}
