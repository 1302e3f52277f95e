//! Repeats squad construction against fresh inventory copies.

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::builder::SquadBuilder;
use crate::config::{AbortPolicy, ConfigError, SquadConfig};
use crate::error::SquadError;
use crate::inventory::Inventory;
use crate::item::Squad;
use crate::strategy::Strategy;

/// Outcome of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Zero-based run index.
    pub index: usize,
    pub outcome: Result<Squad, SquadError>,
}

impl RunReport {
    /// One-based run number for display.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn squad(&self) -> Option<&Squad> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&SquadError> {
        self.outcome.as_ref().err()
    }
}

/// All runs of one driver invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<RunReport>,
    /// Set when an abort stopped the remaining runs.
    pub halted: bool,
}

impl RunSummary {
    pub fn completed(&self) -> impl Iterator<Item = &Squad> {
        self.reports.iter().filter_map(RunReport::squad)
    }

    pub fn failed(&self) -> impl Iterator<Item = &RunReport> {
        self.reports.iter().filter(|report| report.outcome.is_err())
    }

    pub fn is_success(&self) -> bool {
        !self.halted && self.failed().next().is_none()
    }
}

/// Runs `num_squads` independent squad builds.
pub struct RunDriver {
    config: SquadConfig,
    strategy: Box<dyn Strategy>,
}

impl RunDriver {
    /// Validates `config` and instantiates its strategy once for all runs.
    pub fn new(config: SquadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let strategy = config.strategy.build(config.max_retries);
        Ok(Self { config, strategy })
    }

    /// Runs every squad, each against its own clone of `catalog`.
    pub fn run(&self, catalog: &Inventory, rng: &mut dyn RngCore) -> RunSummary {
        self.run_with(catalog, rng, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_report` as soon as each run ends.
    pub fn run_with(
        &self,
        catalog: &Inventory,
        rng: &mut dyn RngCore,
        mut on_report: impl FnMut(&RunReport),
    ) -> RunSummary {
        let builder = SquadBuilder::new(self.config.budget(), &*self.strategy);
        let mut summary = RunSummary::default();

        for index in 0..self.config.num_squads {
            info!(strategy = %self.config.strategy, "Generating squad {} ...", index + 1);

            let mut inventory = catalog.clone();
            let report = RunReport {
                index,
                outcome: builder.build(&mut inventory, rng),
            };

            match &report.outcome {
                Ok(squad) => info!("Squad generated: {}", squad),
                Err(err) => warn!("Squad {} aborted: {}", index + 1, err),
            }

            on_report(&report);
            let aborted = report.outcome.is_err();
            summary.reports.push(report);

            if aborted && self.config.on_abort == AbortPolicy::HaltAll {
                let skipped = self.config.num_squads - index - 1;
                if skipped > 0 {
                    debug!(skipped, "halting remaining runs after abort");
                }
                summary.halted = skipped > 0;
                break;
            }
        }

        summary
    }
}
