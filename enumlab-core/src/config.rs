//! Configuration loading from enumlab.toml.
//!
//! ```toml
//! pages = ["raw-values"]
//!
//! [output]
//! format = "json"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::closed_set::ClosedSet;
use crate::error::{EnumlabError, IoResultExt};
use crate::page::Page;

/// Main configuration structure for enumlab.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EnumlabConfig {
    /// Pages to run, in order. All pages when absent.
    pub pages: Option<Vec<Page>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl EnumlabConfig {
    /// Pages to run; every page in declaration order by default.
    pub fn pages(&self) -> Vec<Page> {
        self.pages.clone().unwrap_or_else(Page::variants)
    }

    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

/// Loads configuration from enumlab.toml in `root` if it exists.
pub fn load_config(root: &Path) -> Result<Option<EnumlabConfig>> {
    let path = root.join("enumlab.toml");
    if !path.exists() {
        return Ok(None);
    }

    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<EnumlabConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| EnumlabError::config(path, e.to_string()))
        .context("Invalid config file")?;
    Ok(cfg)
}
