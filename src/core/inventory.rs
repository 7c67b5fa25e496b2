//! Spice cubes and player inventories.
//!
//! ## Inventory
//!
//! A fixed 4-dimension vector of cube counts, one per `Spice`. Point card
//! goals use the same type: a goal is the inventory a player must hold
//! (at least) to claim the card.
//!
//! ## InventoryChange
//!
//! A signed delta over the same four spices. Claiming a card applies the
//! negated goal.

use serde::{Deserialize, Serialize};
use std::ops::{Index, Neg};

/// Number of spice kinds.
pub const SPICE_COUNT: usize = 4;

/// Cube kinds, ordered from least to most valuable.
///
/// Turmeric is the basic spice: it is what every player starts with and it
/// does not count towards the end-game cube bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spice {
    /// Yellow.
    Turmeric,
    /// Red.
    Saffron,
    /// Green.
    Cardamom,
    /// Brown.
    Cinnamon,
}

impl Spice {
    /// All spices in index order.
    pub const ALL: [Spice; SPICE_COUNT] = [
        Spice::Turmeric,
        Spice::Saffron,
        Spice::Cardamom,
        Spice::Cinnamon,
    ];

    /// Position of this spice in an inventory vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Spice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Spice::Turmeric => "turmeric",
            Spice::Saffron => "saffron",
            Spice::Cardamom => "cardamom",
            Spice::Cinnamon => "cinnamon",
        };
        f.write_str(name)
    }
}

/// Cube counts per spice.
///
/// ## Example
///
/// ```
/// use century_core::core::{Inventory, Spice};
///
/// let held = Inventory::new(3, 1, 0, 0);
/// let goal = Inventory::new(2, 1, 0, 0);
///
/// assert!(held.contains(&goal));
/// assert_eq!(held[Spice::Turmeric], 3);
/// assert_eq!(held.total(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    cubes: [u32; SPICE_COUNT],
}

impl Inventory {
    /// Create an inventory from per-spice counts.
    #[must_use]
    pub const fn new(turmeric: u32, saffron: u32, cardamom: u32, cinnamon: u32) -> Self {
        Self {
            cubes: [turmeric, saffron, cardamom, cinnamon],
        }
    }

    /// An inventory with no cubes.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cubes: [0; SPICE_COUNT] }
    }

    /// Set one spice's count (builder pattern).
    #[must_use]
    pub fn with(mut self, spice: Spice, count: u32) -> Self {
        self.cubes[spice.index()] = count;
        self
    }

    /// Count of a single spice.
    #[must_use]
    pub fn count(&self, spice: Spice) -> u32 {
        self.cubes[spice.index()]
    }

    /// Total cubes across all spices, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cubes.iter().fold(0, |total, &count| total.saturating_add(count))
    }

    /// Is every spice count at least the goal's count?
    #[must_use]
    pub fn contains(&self, goal: &Inventory) -> bool {
        self.cubes
            .iter()
            .zip(goal.cubes.iter())
            .all(|(held, needed)| held >= needed)
    }

    /// The inventory after applying `change`, or `None` if any count
    /// would go negative.
    #[must_use]
    pub fn after(&self, change: &InventoryChange) -> Option<Inventory> {
        let mut cubes = self.cubes;
        for (count, delta) in cubes.iter_mut().zip(change.deltas.iter()) {
            let next = i64::from(*count) + delta;
            *count = u32::try_from(next).ok()?;
        }
        Some(Inventory { cubes })
    }

    /// Apply a change in place.
    ///
    /// Returns false and leaves the inventory untouched if any count
    /// would go negative.
    pub fn change(&mut self, change: &InventoryChange) -> bool {
        match self.after(change) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Iterate over (spice, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Spice, u32)> + '_ {
        Spice::ALL.iter().map(move |&s| (s, self.cubes[s.index()]))
    }
}

impl Index<Spice> for Inventory {
    type Output = u32;

    fn index(&self, spice: Spice) -> &Self::Output {
        &self.cubes[spice.index()]
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [t, s, ca, ci] = self.cubes;
        write!(f, "[T{t} S{s} Ca{ca} Ci{ci}]")
    }
}

/// Signed per-spice delta applied to an inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryChange {
    deltas: [i64; SPICE_COUNT],
}

impl InventoryChange {
    /// Create a change from per-spice deltas.
    #[must_use]
    pub const fn new(turmeric: i64, saffron: i64, cardamom: i64, cinnamon: i64) -> Self {
        Self {
            deltas: [turmeric, saffron, cardamom, cinnamon],
        }
    }

    /// Delta for a single spice.
    #[must_use]
    pub fn delta(&self, spice: Spice) -> i64 {
        self.deltas[spice.index()]
    }

    /// Scale every delta by `factor`.
    #[must_use]
    pub fn multiplied(self, factor: i64) -> Self {
        Self {
            deltas: self.deltas.map(|d| d * factor),
        }
    }

    /// The change that spends exactly `goal`.
    #[must_use]
    pub fn spend(goal: &Inventory) -> Self {
        -Self::from(*goal)
    }
}

impl From<Inventory> for InventoryChange {
    fn from(inventory: Inventory) -> Self {
        Self {
            deltas: inventory.cubes.map(i64::from),
        }
    }
}

impl Neg for InventoryChange {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.multiplied(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_counts() {
        let inv = Inventory::new(3, 1, 2, 0);

        assert_eq!(inv.count(Spice::Turmeric), 3);
        assert_eq!(inv[Spice::Saffron], 1);
        assert_eq!(inv[Spice::Cardamom], 2);
        assert_eq!(inv[Spice::Cinnamon], 0);
        assert_eq!(inv.total(), 6);
    }

    #[test]
    fn test_total_saturates() {
        let inv = Inventory::new(u32::MAX, 1, 0, 0);
        assert_eq!(inv.total(), u32::MAX);
    }

    #[test]
    fn test_with_builder() {
        let inv = Inventory::empty().with(Spice::Cinnamon, 2).with(Spice::Turmeric, 1);
        assert_eq!(inv, Inventory::new(1, 0, 0, 2));
    }

    #[test]
    fn test_contains() {
        let held = Inventory::new(2, 1, 0, 1);

        assert!(held.contains(&Inventory::new(2, 0, 0, 0)));
        assert!(held.contains(&Inventory::new(2, 1, 0, 1)));
        assert!(held.contains(&Inventory::empty()));
        assert!(!held.contains(&Inventory::new(3, 0, 0, 0)));
        assert!(!held.contains(&Inventory::new(0, 0, 1, 0)));
    }

    #[test]
    fn test_spend_goal() {
        let mut inv = Inventory::new(4, 2, 1, 0);
        let goal = Inventory::new(2, 2, 0, 0);

        assert!(inv.change(&InventoryChange::spend(&goal)));
        assert_eq!(inv, Inventory::new(2, 0, 1, 0));
    }

    #[test]
    fn test_change_never_goes_negative() {
        let mut inv = Inventory::new(1, 0, 0, 0);
        let change = InventoryChange::new(-2, 0, 0, 0);

        assert_eq!(inv.after(&change), None);
        assert!(!inv.change(&change));
        assert_eq!(inv, Inventory::new(1, 0, 0, 0)); // Untouched
    }

    #[test]
    fn test_change_gain() {
        let inv = Inventory::new(1, 0, 0, 0);
        let gained = inv.after(&InventoryChange::new(1, 1, 0, 3));
        assert_eq!(gained, Some(Inventory::new(2, 1, 0, 3)));
    }

    #[test]
    fn test_change_arithmetic() {
        let change = InventoryChange::from(Inventory::new(1, 2, 0, 0));
        assert_eq!(change.multiplied(3), InventoryChange::new(3, 6, 0, 0));
        assert_eq!(-change, InventoryChange::new(-1, -2, 0, 0));
        assert_eq!((-change).delta(Spice::Saffron), -2);
    }

    #[test]
    fn test_iter_order() {
        let inv = Inventory::new(1, 2, 3, 4);
        let pairs: Vec<_> = inv.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Spice::Turmeric, 1),
                (Spice::Saffron, 2),
                (Spice::Cardamom, 3),
                (Spice::Cinnamon, 4),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Inventory::new(3, 1, 0, 2)), "[T3 S1 Ca0 Ci2]");
        assert_eq!(format!("{}", Spice::Cardamom), "cardamom");
    }
}
