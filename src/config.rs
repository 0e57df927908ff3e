//! Where the stores live and how they write.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default products file name.
pub const DEFAULT_PRODUCTS_PATH: &str = "products.json";
/// Default sales file name.
pub const DEFAULT_SALES_PATH: &str = "sales.json";

/// Store configuration. Every key is optional in the TOML form.
///
/// ```toml
/// products_path = "data/products.json"
/// sales_path = "data/sales.json"
/// pretty = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Products file.
    pub products_path: PathBuf,
    /// Sales file.
    pub sales_path: PathBuf,
    /// Indent the JSON files.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            sales_path: PathBuf::from(DEFAULT_SALES_PATH),
            pretty: true,
        }
    }
}

impl Config {
    /// Read a TOML config file. Keys it leaves out keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(Error::from)
    }

    /// Set the products file.
    pub fn products_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.products_path = path.into();
        self
    }

    /// Set the sales file.
    pub fn sales_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sales_path = path.into();
        self
    }

    /// Indent the JSON files or not.
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Both files placed under `dir` with their default names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::default()
            .products_path(dir.join(DEFAULT_PRODUCTS_PATH))
            .sales_path(dir.join(DEFAULT_SALES_PATH))
    }
}
