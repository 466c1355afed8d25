use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clutch_catalog::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Subdirectory of the data directory holding session-scoped slots.
const SESSION_DIR: &str = "session";

/// CLI configuration, loadable from a TOML file.
///
/// ```toml
/// data_dir = "/var/lib/clutch"
///
/// [catalog]
/// storage_key = "bikeClutch_bikes"
/// seed_on_first_read = true
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding the catalog slot files.
    pub data_dir: PathBuf,
    pub catalog: CatalogConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".clutch"),
            catalog: CatalogConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path` when given, otherwise use defaults. A `data_dir`
    /// override wins over the file.
    pub fn load(path: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Directory for the comparison selection.
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.join(SESSION_DIR)
    }
}
