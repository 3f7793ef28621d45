//! Configuration loading for objtri.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ObjTriError, Result};
use crate::writer::DEFAULT_HEADER;

/// Config file looked up in the base directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "objtri.toml";

/// Base names converted when nothing else is configured.
pub const DEFAULT_BASES: [&str; 3] = ["p2", "p3", "p4"];

/// Appended to a base name to form the output file stem.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_tri";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub batch: Option<BatchConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    pub files: Option<Vec<String>>,
    pub output_suffix: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub header: Option<String>,
}

impl Config {
    /// Base names to convert, or the built-in list.
    pub fn bases(&self) -> Vec<String> {
        self.batch
            .as_ref()
            .and_then(|b| b.files.clone())
            .unwrap_or_else(|| DEFAULT_BASES.iter().map(ToString::to_string).collect())
    }

    pub fn output_suffix(&self) -> String {
        self.batch
            .as_ref()
            .and_then(|b| b.output_suffix.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string())
    }

    pub fn header(&self) -> String {
        self.output
            .as_ref()
            .and_then(|o| o.header.clone())
            .unwrap_or_else(|| DEFAULT_HEADER.to_string())
    }
}

pub fn default_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_NAME)
}

/// Load a config file. A missing file yields the defaults.
///
/// # Errors
///
/// Returns [`ObjTriError::Config`] if the file exists but cannot be read or
/// parsed.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ObjTriError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&contents).map_err(|e| ObjTriError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
