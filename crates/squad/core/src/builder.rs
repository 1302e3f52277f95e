//! Squad construction loop.
//!
//! The builder repeatedly asks its strategy for one pick until the squad's
//! total cost equals the budget. Every strategy clamps its target to the
//! remaining budget and fills the final slot exactly, so the total never
//! overshoots and the squad never grows past its slot limit. A strategy error
//! ends the squad immediately.

use rand::RngCore;
use tracing::debug;

use crate::config::Budget;
use crate::error::SquadError;
use crate::inventory::Inventory;
use crate::item::Squad;
use crate::strategy::{DrawContext, Strategy};

/// Where a squad stands after a step. An abort is reported as
/// `Err(SquadError)` rather than as a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildPhase {
    /// Budget not reached yet.
    Building,
    /// Total cost equals the budget.
    Done,
}

/// Drives one strategy until a squad reaches its budget.
pub struct SquadBuilder<'s> {
    budget: Budget,
    strategy: &'s dyn Strategy,
}

impl<'s> SquadBuilder<'s> {
    pub fn new(budget: Budget, strategy: &'s dyn Strategy) -> Self {
        Self { budget, strategy }
    }

    /// Phase of `squad` under this builder's budget.
    pub fn phase(&self, squad: &Squad) -> BuildPhase {
        if squad.total_cost() == self.budget.max_cost {
            BuildPhase::Done
        } else {
            BuildPhase::Building
        }
    }

    /// Adds one pick to `squad` unless it is already done.
    ///
    /// # Errors
    ///
    /// Returns [`SquadError::Aborted`] if the strategy cannot draw. The squad
    /// is left as it was before the failed pick.
    pub fn step(
        &self,
        squad: &mut Squad,
        inventory: &mut Inventory,
        rng: &mut dyn RngCore,
    ) -> Result<BuildPhase, SquadError> {
        if self.phase(squad) == BuildPhase::Done {
            return Ok(BuildPhase::Done);
        }

        let mut ctx = DrawContext::new(
            inventory,
            rng,
            self.budget,
            squad.len(),
            squad.total_cost(),
        );

        match self.strategy.draw(&mut ctx) {
            Ok(pick) => {
                debug!(
                    name = %pick.name,
                    cost = pick.cost,
                    slot = squad.len() + 1,
                    "picked"
                );
                squad.push(pick);
                debug_assert!(squad.total_cost() <= self.budget.max_cost);
                Ok(self.phase(squad))
            }
            Err(source) => {
                debug!(
                    strategy = %self.strategy.kind(),
                    stuck_cost = ?source.stuck_cost(),
                    "draw failed: {}",
                    source
                );
                Err(SquadError::Aborted {
                    strategy: self.strategy.kind(),
                    picks_made: squad.len(),
                    spent: squad.total_cost(),
                    max_cost: self.budget.max_cost,
                    source,
                })
            }
        }
    }

    /// Builds a complete squad, draining `inventory`.
    pub fn build(
        &self,
        inventory: &mut Inventory,
        rng: &mut dyn RngCore,
    ) -> Result<Squad, SquadError> {
        let mut squad = Squad::new();
        while self.step(&mut squad, inventory, rng)? == BuildPhase::Building {}
        Ok(squad)
    }
}
