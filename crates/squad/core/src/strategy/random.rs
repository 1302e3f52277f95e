use rand::seq::IndexedRandom;
use tracing::{debug, trace};

use super::{DrawContext, Strategy, StrategyKind};
use crate::error::DrawError;
use crate::item::Pick;

/// Picks a uniformly random tier, retrying when the clamped tier is empty.
///
/// Retries are the only recovery path in the crate: after `max_retries`
/// empty draws the strategy gives up with [`DrawError::RetryExhausted`],
/// naming the last cost it tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomStrategy {
    max_retries: u32,
}

impl RandomStrategy {
    pub const fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError> {
        let mut cost_choice = ctx.remaining_budget();

        for attempt in 1..=self.max_retries {
            let tiers = ctx.cost_tiers();
            let candidate = *tiers
                .choose(&mut *ctx.rng)
                .ok_or(DrawError::InventoryExhausted)?;
            cost_choice = ctx.target_cost(candidate);

            match ctx.draw_exact(cost_choice) {
                Ok(pick) => return Ok(pick),
                Err(err) if err.severity().is_recoverable() => {
                    trace!(attempt, cost = cost_choice, "tier empty, retrying");
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            attempts = self.max_retries,
            cost = cost_choice,
            "max retries reached"
        );
        Err(DrawError::RetryExhausted {
            cost: cost_choice,
            attempts: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Budget;
    use crate::inventory::Inventory;
    use crate::item::Item;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_within_remaining_budget() {
        let mut inventory = Inventory::from_items([
            Item::new("A", 1),
            Item::new("B", 2),
            Item::new("C", 9),
        ]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 5), 1, 8);

        let pick = RandomStrategy::new(100).draw(&mut ctx).unwrap();
        assert!(pick.cost <= 2);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn final_slot_takes_exact_remainder() {
        let mut inventory = Inventory::from_items([Item::new("A", 1), Item::new("B", 6)]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 2), 1, 4);

        let pick = RandomStrategy::new(100).draw(&mut ctx).unwrap();
        assert_eq!(pick, Pick::new("B", 6));
    }

    #[test]
    fn gives_up_after_max_retries() {
        let mut inventory = Inventory::from_items([Item::new("A", 4), Item::new("B", 4)]);
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 2), 1, 4);

        let err = RandomStrategy::new(25).draw(&mut ctx).unwrap_err();
        assert_eq!(
            err,
            DrawError::RetryExhausted {
                cost: 6,
                attempts: 25
            }
        );
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn empty_inventory_is_fatal() {
        let mut inventory = Inventory::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 2), 0, 0);

        assert_eq!(
            RandomStrategy::new(5).draw(&mut ctx),
            Err(DrawError::InventoryExhausted)
        );
    }
}
