//! Squad construction rules shared by loaders and the command-line client.
//!
//! `squad-core` turns a catalog of costed items into squads whose total cost
//! matches a budget exactly. A [`Strategy`] decides which cost tier to draw
//! from at each step, [`SquadBuilder`] drives one squad to completion, and
//! [`RunDriver`] repeats that against fresh [`Inventory`] copies.
//!
//! The crate performs no I/O. Randomness is injected as `&mut dyn RngCore`
//! so callers control seeding.
pub mod builder;
pub mod config;
pub mod driver;
pub mod error;
pub mod inventory;
pub mod item;
pub mod strategy;

pub use builder::{BuildPhase, SquadBuilder};
pub use config::{AbortPolicy, Budget, ConfigError, SquadConfig};
pub use driver::{RunDriver, RunReport, RunSummary};
pub use error::{DrawError, ErrorSeverity, SquadError};
pub use inventory::Inventory;
pub use item::{Item, Pick, Squad};
pub use strategy::{
    BalancedStrategy, DrawContext, MaxAttackStrategy, RandomOfStrategies, RandomStrategy,
    Strategy, StrategyKind,
};
