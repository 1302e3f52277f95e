use tracing::trace;

use super::{DrawContext, Strategy, StrategyKind};
use crate::error::DrawError;
use crate::item::Pick;

/// Spreads the remaining budget evenly across the remaining slots.
///
/// The ideal per-slot cost is `ceil(remaining_budget / remaining_slots)`.
/// The stocked tier closest to it wins; on a tie the lower cost wins. Like
/// [`MaxAttackStrategy`](super::MaxAttackStrategy), an empty target tier is
/// an immediate failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalancedStrategy;

impl BalancedStrategy {
    /// Ideal per-slot cost for the given progress.
    pub fn ideal_cost(ctx: &DrawContext<'_>) -> u32 {
        let slots = u32::try_from(ctx.remaining_slots().max(1)).unwrap_or(u32::MAX);
        ctx.remaining_budget().div_ceil(slots)
    }
}

impl Strategy for BalancedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Balanced
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError> {
        let ideal = Self::ideal_cost(ctx);

        // Tiers are ascending and min_by_key keeps the first minimum.
        let closest = ctx
            .cost_tiers()
            .into_iter()
            .min_by_key(|cost| cost.abs_diff(ideal))
            .ok_or(DrawError::InventoryExhausted)?;

        let cost = ctx.target_cost(closest);
        trace!(ideal, closest, cost, "balanced target");
        ctx.draw_exact(cost)
    }
}
