use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::Unit;

const DEFAULT_PAGE_SIZE: usize = 5;

/// Runtime settings. Every field has a default so a config file only needs
/// the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the per-city CSV files
    pub data_dir: PathBuf,

    /// Rows shown per page by the raw data pager
    pub page_size: usize,

    /// Unit used when reporting trip durations
    pub duration_unit: Unit,

    /// Per-city file overrides keyed by city name, relative to `data_dir` unless absolute
    pub files: HashMap<String, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            duration_unit: Unit::Seconds,
            files: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Reading configuration from {}", path.as_ref().display());
        let raw = fs::read_to_string(path)?;
        Config::from_json(&raw)
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
