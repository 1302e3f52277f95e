//! Squad configuration loader.

use std::path::Path;

use squad_core::SquadConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for squad configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`SquadConfig::default`] values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing SquadConfig
    pub fn load(path: &Path) -> LoadResult<SquadConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SquadConfig> {
        let config: SquadConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
