use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ToolCompareConfig;
use super::pricing::PricingConfig;
use crate::core::{Error, Result};

/// File name searched for by `load_config`.
pub const CONFIG_FILE_NAME: &str = ".toolcompare.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid pricing constants
/// with defaults.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<ToolCompareConfig, String> {
    let mut config = toml::from_str::<ToolCompareConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(errors) = config.pricing.validate() {
        log::warn!(
            "Invalid pricing configuration: {}. Using defaults.",
            errors.join("; ")
        );
        config.pricing = PricingConfig::default();
    }

    Ok(config)
}

/// Load configuration from an explicit path.
///
/// Unlike `load_config`, a missing or unparseable file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ToolCompareConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ToolCompareConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search for `.toolcompare.toml` from `start` upward.
pub fn load_config_from(start: PathBuf) -> ToolCompareConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ToolCompareConfig::default()
        })
}

/// Search for `.toolcompare.toml` from the current directory upward.
pub fn load_config() -> ToolCompareConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ToolCompareConfig::default()
        }
    }
}
