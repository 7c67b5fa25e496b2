//! Card definitions - static card data.
//!
//! Point cards and merchant cards are immutable once dealt. The engine only
//! reads a point card's goal and points; merchant cards ride along in the
//! merchant row and are never interpreted here.

use serde::{Deserialize, Serialize};

use crate::core::inventory::Inventory;

/// Unique identifier for a card.
///
/// Point and merchant cards share one id space so a catalog can hold both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card claimable by spending its goal, worth fixed points.
///
/// ## Example
///
/// ```
/// use century_core::cards::{CardId, PointCard};
/// use century_core::core::Inventory;
///
/// let card = PointCard::new(CardId::new(1), Inventory::new(2, 2, 0, 0), 6);
/// assert_eq!(card.points, 6);
/// assert_eq!(card.goal.total(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointCard {
    /// Card identity.
    pub id: CardId,

    /// Cubes that must be held, and are spent, to claim the card.
    pub goal: Inventory,

    /// Points scored at game end.
    pub points: u32,
}

impl PointCard {
    /// Create a new point card.
    #[must_use]
    pub const fn new(id: CardId, goal: Inventory, points: u32) -> Self {
        Self { id, goal, points }
    }
}

/// What a merchant card does when played.
///
/// Only described, never executed by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MerchantAction {
    /// Take these cubes from the supply.
    Gain(Inventory),
    /// Upgrade this many cubes one step up the spice ladder.
    Upgrade(u8),
    /// Exchange `give` for `take`, repeatable.
    Trade {
        /// Cubes paid per exchange.
        give: Inventory,
        /// Cubes received per exchange.
        take: Inventory,
    },
}

/// A merchant card in the merchant row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantCard {
    /// Card identity.
    pub id: CardId,

    /// Printed action.
    pub action: MerchantAction,
}

impl MerchantCard {
    /// Create a new merchant card.
    #[must_use]
    pub const fn new(id: CardId, action: MerchantAction) -> Self {
        Self { id, action }
    }
}
