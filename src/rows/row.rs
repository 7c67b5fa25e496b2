//! Ordered card rows.
//!
//! Slot 0 is the front of the row. Removing a card slides everything behind
//! it one slot forward; replacements join at the back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, MerchantCard, PointCard};

/// Cards that can sit in a row.
pub trait RowCard: Copy {
    /// Identity used for row lookups.
    fn card_id(&self) -> CardId;
}

impl RowCard for PointCard {
    fn card_id(&self) -> CardId {
        self.id
    }
}

impl RowCard for MerchantCard {
    fn card_id(&self) -> CardId {
        self.id
    }
}

/// An ordered row of face-up cards.
///
/// ## Usage
///
/// ```
/// use century_core::cards::{CardId, PointCard};
/// use century_core::core::Inventory;
/// use century_core::rows::CardRow;
///
/// let a = PointCard::new(CardId::new(1), Inventory::new(2, 0, 0, 0), 5);
/// let b = PointCard::new(CardId::new(2), Inventory::new(0, 1, 0, 0), 3);
/// let mut row = CardRow::from(vec![a, b]);
///
/// assert_eq!(row.position(CardId::new(2)), Some(1));
///
/// row.remove(CardId::new(1));
/// assert_eq!(row.position(CardId::new(2)), Some(0)); // Slid forward
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow<C> {
    /// SmallVec keeps the usual 5-6 face-up cards inline.
    cards: SmallVec<[C; 6]>,
}

impl<C: RowCard> CardRow<C> {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: SmallVec::new(),
        }
    }

    /// Slot of the first card with this id.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.card_id() == id)
    }

    /// Is a card with this id in the row?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Card in a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&C> {
        self.cards.get(slot)
    }

    /// Card with this id.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<&C> {
        self.cards.iter().find(|c| c.card_id() == id)
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the row empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove the first card with this id, sliding later cards forward.
    ///
    /// Returns the slot it occupied and the card.
    pub fn remove(&mut self, id: CardId) -> Option<(usize, C)> {
        let slot = self.position(id)?;
        Some((slot, self.cards.remove(slot)))
    }

    /// Add a card at the back of the row.
    pub fn push(&mut self, card: C) {
        self.cards.push(card);
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }

    /// Cards front to back, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.cards
    }
}

impl<C: RowCard> Default for CardRow<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: RowCard> From<Vec<C>> for CardRow<C> {
    fn from(cards: Vec<C>) -> Self {
        Self {
            cards: SmallVec::from_vec(cards),
        }
    }
}

impl<C: RowCard> FromIterator<C> for CardRow<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<C: RowCard> IntoIterator for CardRow<C> {
    type Item = C;
    type IntoIter = smallvec::IntoIter<[C; 6]>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, C: RowCard> IntoIterator for &'a CardRow<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
