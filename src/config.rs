//! Configuration loading
//!
//! Reads `~/.config/produce-tally/config.toml`. Every field is optional.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, FilesConfig, HistogramConfig, LookupCase,
    LookupConfig,
};

use crate::error::TallyError;

const CONFIG_DIR: &str = "produce-tally";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the default config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a config file exists but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location.
///
/// A missing file gives the defaults; an unreadable or invalid one gives the
/// defaults plus a warning.
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    load_config_or_default(&path)
}

pub fn load_config_or_default(path: &Path) -> ConfigResult {
    match load_config_from_path(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(TallyError::SourceUnavailable { source, .. })
            if source.kind() == io::ErrorKind::NotFound =>
        {
            ConfigResult {
                config: Config::default(),
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Ignoring {}: {}", path.display(), e)),
        },
    }
}

/// Load the config at `path`, failing if it is missing or invalid.
pub fn load_config_from_path(path: &Path) -> Result<Config, TallyError> {
    let contents = fs::read_to_string(path).map_err(|source| TallyError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, TallyError> {
    toml::from_str(content).map_err(|e| TallyError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
