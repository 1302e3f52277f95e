//! Client configuration structures and loaders.
//!
//! Settings are layered, later layers winning:
//! 1. [`SquadConfig::default`]
//! 2. `--config` file, or `squad.toml` under `--data-dir`
//! 3. Environment (`SQUADGEN_SEED`, `SQUADGEN_MAX_RETRIES`)
//! 4. Command-line flags
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use squad_content::{CatalogLoader, ConfigLoader, ContentFactory};
use squad_core::{AbortPolicy, Inventory, SquadConfig};

use crate::cli::{Cli, OutputFormat};

/// Settings read from the process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub seed: Option<u64>,
    pub max_retries: Option<u32>,
}

impl EnvConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SQUADGEN_SEED` - Seed for the random source (default: OS entropy)
    /// - `SQUADGEN_MAX_RETRIES` - Attempts per pick for the random strategy
    pub fn from_env() -> Self {
        Self {
            seed: read_env("SQUADGEN_SEED"),
            max_retries: read_env("SQUADGEN_MAX_RETRIES"),
        }
    }
}

/// Where the item catalog comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    DataDir(PathBuf),
}

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub squad: SquadConfig,
    pub catalog: CatalogSource,
    pub delimiter: char,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl ClientConfig {
    /// Resolve every configuration layer for `cli`.
    pub fn resolve(cli: &Cli, env: &EnvConfig) -> Result<Self> {
        let mut squad = match (&cli.config, &cli.data_dir) {
            (Some(path), _) => ConfigLoader::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            (None, Some(dir)) => ContentFactory::new(dir).load_config()?,
            (None, None) => SquadConfig::default(),
        };

        if let Some(max_retries) = env.max_retries {
            squad.max_retries = max_retries;
        }

        if let Some(max_cost) = cli.max_cost {
            squad.max_cost = max_cost;
        }
        if let Some(squad_size) = cli.squad_size {
            squad.max_squad_size = squad_size;
        }
        if let Some(num_squads) = cli.num_squads {
            squad.num_squads = num_squads;
        }
        if let Some(strategy) = cli.strategy {
            squad.strategy = strategy;
        }
        if let Some(max_retries) = cli.max_retries {
            squad.max_retries = max_retries;
        }
        if cli.keep_going {
            squad.on_abort = AbortPolicy::Continue;
        }

        squad.validate()?;

        let catalog = match (&cli.characters_file, &cli.data_dir) {
            (Some(path), _) => CatalogSource::File(path.clone()),
            (None, Some(dir)) => CatalogSource::DataDir(dir.clone()),
            (None, None) => anyhow::bail!("either --characters-file or --data-dir is required"),
        };

        Ok(Self {
            squad,
            catalog,
            delimiter: cli.delimiter,
            seed: cli.seed.or(env.seed),
            format: cli.format,
        })
    }

    /// Load the catalog named by [`CatalogSource`] into an inventory.
    pub fn load_inventory(&self) -> Result<Inventory> {
        let loader = CatalogLoader::with_delimiter(self.delimiter);
        match &self.catalog {
            CatalogSource::File(path) => loader
                .load_inventory(path)
                .with_context(|| format!("loading characters file {}", path.display())),
            CatalogSource::DataDir(dir) => ContentFactory::new(dir)
                .with_catalog_loader(loader)
                .load_inventory(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use squad_core::StrategyKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("squadgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["-c", "chars.csv", "-m", "10", "-t", "balanced", "--keep-going"]);
        let config = ClientConfig::resolve(&cli, &EnvConfig::default()).unwrap();

        assert_eq!(config.squad.max_cost, 10);
        assert_eq!(config.squad.max_squad_size, SquadConfig::DEFAULT_MAX_SQUAD_SIZE);
        assert_eq!(config.squad.strategy, StrategyKind::Balanced);
        assert_eq!(config.squad.on_abort, AbortPolicy::Continue);
        assert_eq!(config.catalog, CatalogSource::File(PathBuf::from("chars.csv")));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn env_sits_between_file_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "max_retries = 5\nmax_cost = 12\n").unwrap();

        let env = EnvConfig {
            seed: Some(9),
            max_retries: Some(40),
        };
        let cli = parse(&["-c", "chars.csv", "--config", config_path.to_str().unwrap()]);
        let config = ClientConfig::resolve(&cli, &env).unwrap();
        assert_eq!(config.squad.max_cost, 12);
        assert_eq!(config.squad.max_retries, 40);
        assert_eq!(config.seed, Some(9));

        let cli = parse(&[
            "-c",
            "chars.csv",
            "--config",
            config_path.to_str().unwrap(),
            "--max-retries",
            "70",
            "--seed",
            "1",
        ]);
        let config = ClientConfig::resolve(&cli, &env).unwrap();
        assert_eq!(config.squad.max_retries, 70);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn data_dir_supplies_config_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("squad.toml"), "num_squads = 4\n").unwrap();
        std::fs::write(dir.path().join("characters.csv"), "name,cost\nA,15\n").unwrap();

        let cli = parse(&["--data-dir", dir.path().to_str().unwrap()]);
        let config = ClientConfig::resolve(&cli, &EnvConfig::default()).unwrap();

        assert_eq!(config.squad.num_squads, 4);
        assert_eq!(config.load_inventory().unwrap().cost_tiers(), vec![15]);
    }

    #[test]
    fn invalid_squad_size_is_rejected() {
        let cli = parse(&["-c", "chars.csv", "-n", "0"]);
        assert!(ClientConfig::resolve(&cli, &EnvConfig::default()).is_err());
    }
}
