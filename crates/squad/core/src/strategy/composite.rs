use rand::Rng;
use tracing::debug;

use super::{
    BalancedStrategy, DrawContext, MaxAttackStrategy, RandomStrategy, Strategy, StrategyKind,
};
use crate::error::DrawError;
use crate::item::Pick;

/// Delegates every draw to a uniformly sampled child strategy.
///
/// The choice is made per call, so one squad may mix policies. Child errors
/// are returned unchanged: an empty tier under a max-attack or balanced
/// delegate is as fatal here as it is there.
pub struct RandomOfStrategies {
    children: Vec<Box<dyn Strategy>>,
}

impl RandomOfStrategies {
    /// Samples among the random, max-attack and balanced strategies.
    pub fn new(max_retries: u32) -> Self {
        Self::with_children(vec![
            Box::new(RandomStrategy::new(max_retries)),
            Box::new(MaxAttackStrategy),
            Box::new(BalancedStrategy),
        ])
    }

    /// Creates a meta-strategy over the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A meta-strategy with nothing to
    /// delegate to is a programming error.
    pub fn with_children(children: Vec<Box<dyn Strategy>>) -> Self {
        assert!(
            !children.is_empty(),
            "RandomOfStrategies must have at least one child"
        );
        Self { children }
    }

    pub fn child_kinds(&self) -> Vec<StrategyKind> {
        self.children.iter().map(|child| child.kind()).collect()
    }
}

impl Strategy for RandomOfStrategies {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RandomOfStrategies
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<Pick, DrawError> {
        // `with_children` guarantees at least one child.
        let child = &self.children[ctx.rng.random_range(0..self.children.len())];
        debug!(delegate = %child.kind(), "rrandom delegating");
        child.draw(ctx)
    }
}
