//! Data-driven squad content and loaders.
//!
//! This crate reads the files `squad-core` consumes:
//! - Item catalogs (delimited text, `name,cost` rows under a header line)
//! - Squad configuration (data-driven via TOML)
//!
//! Loaders return `squad-core` types directly.

pub mod loaders;

pub use loaders::{CatalogError, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
