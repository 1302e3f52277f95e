//! Catalog items and the squads built from them.

use core::fmt;

/// A catalog entry: a named item with an integer cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub cost: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// One item drawn into a squad.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pick {
    pub name: String,
    pub cost: u32,
}

impl Pick {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.cost)
    }
}

/// Ordered picks of one run plus their running total.
///
/// Picks only ever get appended, so `total_cost` always equals the sum of
/// the pick costs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Squad {
    picks: Vec<Pick>,
    total_cost: u32,
}

impl Squad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pick: Pick) {
        self.total_cost += pick.cost;
        self.picks.push(pick);
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter()
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.picks.iter().any(|pick| pick.name == name)
    }
}

impl fmt::Display for Squad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, pick) in self.picks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pick}")?;
        }
        write!(f, "] total={}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tracks_total_cost() {
        let mut squad = Squad::new();
        squad.push(Pick::new("Goku", 7));
        squad.push(Pick::new("Krillin", 3));

        assert_eq!(squad.len(), 2);
        assert_eq!(squad.total_cost(), 10);
        assert!(squad.contains("Krillin"));
        assert!(!squad.contains("Vegeta"));
    }

    #[test]
    fn display_lists_picks_in_order() {
        let mut squad = Squad::new();
        squad.push(Pick::new("C", 7));
        squad.push(Pick::new("A", 3));

        assert_eq!(squad.to_string(), "[(C, 7), (A, 3)] total=10");
        assert_eq!(Squad::new().to_string(), "[] total=0");
    }
}
