//! Cost-tier inventory.
//!
//! Items are bucketed by cost. One inventory is built from the catalog and
//! cloned for every run; a run drains its own copy through [`Inventory::take`].

use std::collections::BTreeMap;

use rand::{Rng, RngCore};

use crate::error::DrawError;
use crate::item::Item;

/// Multiset of item names keyed by cost.
///
/// Buckets live in a `BTreeMap`, so every tier listing is in ascending cost
/// order. A name appears in at most one bucket and leaves it when taken.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    tiers: BTreeMap<u32, Vec<String>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory, appending each item to the bucket for its cost.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.insert(item);
        }
        inventory
    }

    pub fn insert(&mut self, item: Item) {
        self.tiers.entry(item.cost).or_default().push(item.name);
    }

    /// Costs that still have at least one item, ascending.
    pub fn cost_tiers(&self) -> Vec<u32> {
        self.tiers
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(&cost, _)| cost)
            .collect()
    }

    /// Every cost ever loaded, including depleted tiers.
    pub fn all_tiers(&self) -> Vec<u32> {
        self.tiers.keys().copied().collect()
    }

    /// Number of items left at `cost`.
    pub fn available(&self, cost: u32) -> usize {
        self.tiers.get(&cost).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(Vec::is_empty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tiers.values().flatten().any(|n| n == name)
    }

    /// Removes one item chosen uniformly at random from the `cost` bucket.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyTier`] if nothing is left at that cost.
    pub fn take(&mut self, cost: u32, rng: &mut dyn RngCore) -> Result<String, DrawError> {
        let bucket = self
            .tiers
            .get_mut(&cost)
            .filter(|names| !names.is_empty())
            .ok_or(DrawError::EmptyTier { cost })?;

        let index = rng.random_range(0..bucket.len());
        Ok(bucket.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Inventory {
        Inventory::from_items([
            Item::new("A", 3),
            Item::new("B", 5),
            Item::new("C", 7),
            Item::new("E", 5),
        ])
    }

    #[test]
    fn tiers_are_ascending_and_grouped() {
        let inventory = sample();
        assert_eq!(inventory.cost_tiers(), vec![3, 5, 7]);
        assert_eq!(inventory.available(5), 2);
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn take_removes_exactly_one_item() {
        let mut inventory = sample();
        let mut rng = StdRng::seed_from_u64(7);

        let name = inventory.take(5, &mut rng).unwrap();
        assert!(name == "B" || name == "E");
        assert!(!inventory.contains(&name));
        assert_eq!(inventory.available(5), 1);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn depleted_tier_drops_out_of_cost_tiers() {
        let mut inventory = sample();
        let mut rng = StdRng::seed_from_u64(1);

        inventory.take(3, &mut rng).unwrap();

        assert_eq!(inventory.cost_tiers(), vec![5, 7]);
        assert_eq!(inventory.all_tiers(), vec![3, 5, 7]);
        assert_eq!(
            inventory.take(3, &mut rng),
            Err(DrawError::EmptyTier { cost: 3 })
        );
    }

    #[test]
    fn take_from_unknown_tier_fails() {
        let mut inventory = sample();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            inventory.take(42, &mut rng),
            Err(DrawError::EmptyTier { cost: 42 })
        );
    }

    #[test]
    fn clones_deplete_independently() {
        let original = sample();
        let mut copy = original.clone();
        let mut rng = StdRng::seed_from_u64(3);

        copy.take(7, &mut rng).unwrap();

        assert_eq!(copy.available(7), 0);
        assert_eq!(original.available(7), 1);
    }
}
