//! Squad generator binary.
//!
//! # Examples
//!
//! ```bash
//! # Three balanced squads with a 10-point budget and at most two characters
//! cargo run -p squad-client -- -c characters.csv -m 10 -n 2 -s 3 -t balanced
//!
//! # Reproducible JSON output
//! SQUADGEN_SEED=42 cargo run -p squad-client -- -c characters.csv --format json
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use squad_client::report::{render_json, render_text, render_text_footer};
use squad_client::{Cli, ClientConfig, EnvConfig, OutputFormat, logging};
use squad_core::RunDriver;

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(logging::level_for(cli.verbose, cli.quiet))?;

    // 1. Resolve configuration layers
    let config = ClientConfig::resolve(&cli, &EnvConfig::from_env())?;
    tracing::debug!(?config, "Configuration resolved");

    // 2. Load catalog; a malformed row stops everything here
    let inventory = config.load_inventory()?;
    tracing::info!(
        items = inventory.len(),
        tiers = ?inventory.cost_tiers(),
        "Catalog loaded"
    );

    // 3. Run
    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let driver = RunDriver::new(config.squad.clone())?;
    let summary = match config.format {
        OutputFormat::Text => {
            let summary = driver.run_with(&inventory, &mut rng, |report| {
                println!("{}", render_text(report))
            });
            if let Some(footer) = render_text_footer(&summary, config.squad.num_squads) {
                println!("{footer}");
            }
            summary
        }
        OutputFormat::Json => {
            let summary = driver.run(&inventory, &mut rng);
            println!("{}", render_json(&summary)?);
            summary
        }
    };

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(
            failed = summary.failed().count(),
            halted = summary.halted,
            "Some squads could not be generated"
        );
        Ok(ExitCode::FAILURE)
    }
}
