//! Command-line front end for squad generation.
//!
//! The `squadgen` binary is the composition root: it resolves configuration
//! from files, environment and flags, loads the catalog, runs the
//! [`squad_core::RunDriver`] and prints one report per squad.

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;

pub use cli::{Cli, OutputFormat};
pub use config::{CatalogSource, ClientConfig, EnvConfig};
