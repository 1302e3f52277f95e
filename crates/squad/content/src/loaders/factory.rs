//! Content factory for loading squad inputs from a data directory.

use std::path::{Path, PathBuf};

use squad_core::{Inventory, SquadConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads squad content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── squad.toml
/// └── characters.csv
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    catalog: CatalogLoader,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "squad.toml";
    pub const CATALOG_FILE: &'static str = "characters.csv";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog: CatalogLoader::new(),
        }
    }

    pub fn with_catalog_loader(mut self, catalog: CatalogLoader) -> Self {
        self.catalog = catalog;
        self
    }

    /// Load squad configuration from `squad.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<SquadConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(SquadConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `characters.csv`.
    pub fn load_inventory(&self) -> LoadResult<Inventory> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        Ok(self.catalog.load_inventory(&path)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
