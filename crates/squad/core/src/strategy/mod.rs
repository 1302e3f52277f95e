//! Tier-selection strategies.
//!
//! This module defines the [`Strategy`] trait, the abstraction every squad
//! policy implements. A strategy looks at the remaining budget and slots
//! through a [`DrawContext`], picks a cost tier, and draws one item from it.
//!
//! - [`RandomStrategy`]: uniform tier, bounded retries on empty tiers
//! - [`MaxAttackStrategy`]: highest tier first
//! - [`BalancedStrategy`]: tier closest to an even per-slot share
//! - [`RandomOfStrategies`]: delegates each call to one of the above

mod balanced;
mod composite;
mod max_attack;
mod random;

pub use balanced::BalancedStrategy;
pub use composite::RandomOfStrategies;
pub use max_attack::MaxAttackStrategy;
pub use random::RandomStrategy;

use rand::RngCore;

use crate::config::Budget;
use crate::error::DrawError;
use crate::inventory::Inventory;
use crate::item::Pick;

/// Strategy selector as it appears in configuration and on the command line.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StrategyKind {
    #[default]
    #[strum(serialize = "random")]
    #[cfg_attr(feature = "serde", serde(rename = "random"))]
    Random,

    #[strum(serialize = "rrandom")]
    #[cfg_attr(feature = "serde", serde(rename = "rrandom"))]
    RandomOfStrategies,

    #[strum(serialize = "max_attack")]
    #[cfg_attr(feature = "serde", serde(rename = "max_attack"))]
    MaxAttack,

    #[strum(serialize = "balanced")]
    #[cfg_attr(feature = "serde", serde(rename = "balanced"))]
    Balanced,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        Self::Random,
        Self::RandomOfStrategies,
        Self::MaxAttack,
        Self::Balanced,
    ];

    /// Instantiates the strategy for this tag.
    ///
    /// `max_retries` only affects [`RandomStrategy`], directly or through
    /// [`RandomOfStrategies`].
    pub fn build(self, max_retries: u32) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomStrategy::new(max_retries)),
            Self::RandomOfStrategies => Box::new(RandomOfStrategies::new(max_retries)),
            Self::MaxAttack => Box::new(MaxAttackStrategy),
            Self::Balanced => Box::new(BalancedStrategy),
        }
    }
}

/// A squad policy that draws one item per call.
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Choose a cost tier and remove one item from it.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Current squad progress plus the inventory and random source
    ///   to draw from. The inventory is mutated on success.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] when no item can be drawn under the current
    /// budget. The caller treats every error returned here as fatal.
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError>;
}

impl Strategy for Box<dyn Strategy> {
    #[inline]
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    #[inline]
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError> {
        (**self).draw(ctx)
    }
}

/// Everything a strategy may read or mutate during one draw.
pub struct DrawContext<'a> {
    pub inventory: &'a mut Inventory,
    pub rng: &'a mut dyn RngCore,
    pub budget: Budget,
    /// Items already in the squad.
    pub squad_size: usize,
    /// Cost already spent.
    pub squad_cost: u32,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        inventory: &'a mut Inventory,
        rng: &'a mut dyn RngCore,
        budget: Budget,
        squad_size: usize,
        squad_cost: u32,
    ) -> Self {
        Self {
            inventory,
            rng,
            budget,
            squad_size,
            squad_cost,
        }
    }

    pub fn remaining_budget(&self) -> u32 {
        self.budget.max_cost.saturating_sub(self.squad_cost)
    }

    pub fn remaining_slots(&self) -> usize {
        self.budget.max_squad_size.saturating_sub(self.squad_size)
    }

    /// True when the next pick fills the last allowed slot.
    pub fn is_final_slot(&self) -> bool {
        self.squad_size + 1 == self.budget.max_squad_size
    }

    /// Turns a candidate tier into the cost actually drawn.
    ///
    /// The candidate is clamped to the remaining budget, and the final slot
    /// always takes exactly what is left so a finished squad never misses the
    /// budget.
    pub fn target_cost(&self, candidate: u32) -> u32 {
        if self.is_final_slot() {
            self.remaining_budget()
        } else {
            candidate.min(self.remaining_budget())
        }
    }

    /// Draws one item of exactly `cost`, with no fallback tier.
    pub fn draw_exact(&mut self, cost: u32) -> Result<Pick, DrawError> {
        let name = self.inventory.take(cost, &mut *self.rng)?;
        Ok(Pick::new(name, cost))
    }

    /// Tiers that still hold items, ascending.
    pub fn cost_tiers(&self) -> Vec<u32> {
        self.inventory.cost_tiers()
    }
}
