//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use squad_core::StrategyKind;

/// Generate random squads whose item costs add up to an exact budget.
///
/// Squads are built one pick at a time by a selection strategy.
#[derive(Parser, Debug)]
#[command(name = "squadgen")]
#[command(version)]
pub struct Cli {
    /// CSV file storing the character names and the cost for each character
    #[arg(short = 'c', long, required_unless_present = "data_dir")]
    pub characters_file: Option<PathBuf>,

    /// Directory holding `characters.csv` and an optional `squad.toml`
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// TOML file with squad settings (overrides `squad.toml` in --data-dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exact total cost of each squad [default: 15]
    #[arg(short = 'm', long)]
    pub max_cost: Option<u32>,

    /// Maximum number of characters in each squad [default: 5]
    #[arg(short = 'n', long)]
    pub squad_size: Option<usize>,

    /// Number of squads to generate [default: 1]
    #[arg(short = 's', long)]
    pub num_squads: Option<usize>,

    /// Generation strategy: random, rrandom, max_attack or balanced [default: random]
    #[arg(short = 't', long)]
    pub strategy: Option<StrategyKind>,

    /// Seed for reproducible output (env: SQUADGEN_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attempts the random strategy makes per pick (env: SQUADGEN_MAX_RETRIES) [default: 1000]
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Keep generating the remaining squads after one aborts
    #[arg(long)]
    pub keep_going: bool,

    /// Field delimiter of the characters file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Output format of the squad reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
