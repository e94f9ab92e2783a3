//! Forms configuration
//!
//! Read from a TOML file; every key is optional.
//!
//! ```toml
//! [storage]
//! path = "/var/lib/opensase/forms"
//! slot = "savedForms"
//!
//! [runtime]
//! derivation = "stale-snapshot"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::DerivationMode;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub storage: StorageConfig,
    pub runtime: RuntimeConfig,
}

/// Where the saved collection lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the slot file
    pub path: PathBuf,
    /// Slot name; the file is `<slot>.json`
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("opensase").join("forms"),
            slot: "savedForms".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub derivation: DerivationMode,
}

impl FormsConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No forms config, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
