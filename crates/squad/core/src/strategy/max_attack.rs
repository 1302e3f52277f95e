use super::{DrawContext, Strategy, StrategyKind};
use crate::error::DrawError;
use crate::item::Pick;

/// Always aims for the most expensive tier still stocked.
///
/// There is no fallback: if the clamped tier is empty the draw fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxAttackStrategy;

impl Strategy for MaxAttackStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MaxAttack
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError> {
        let highest = ctx
            .cost_tiers()
            .last()
            .copied()
            .ok_or(DrawError::InventoryExhausted)?;

        let cost = ctx.target_cost(highest);
        ctx.draw_exact(cost)
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
    fn picks_highest_tier_clamped_to_budget() {
        let mut inventory = Inventory::from_items([
            Item::new("A", 3),
            Item::new("B", 5),
            Item::new("C", 7),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 3), 0, 0);
        assert_eq!(MaxAttackStrategy.draw(&mut ctx), Ok(Pick::new("C", 7)));

        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 3), 1, 7);
        assert_eq!(MaxAttackStrategy.draw(&mut ctx), Ok(Pick::new("A", 3)));
    }

    #[test]
    fn empty_clamped_tier_fails_without_retry() {
        let mut inventory = Inventory::from_items([Item::new("A", 4), Item::new("B", 4)]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = DrawContext::new(&mut inventory, &mut rng, Budget::new(10, 3), 1, 8);

        assert_eq!(
            MaxAttackStrategy.draw(&mut ctx),
            Err(DrawError::EmptyTier { cost: 2 })
        );
        assert_eq!(inventory.len(), 2);
    }
}
