//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the point and merchant cards available to a
//! match and builds rows from id lists handed over by setup code.

use rustc_hash::FxHashMap;

use super::definition::{CardId, MerchantCard, PointCard};
use crate::core::error::GameError;
use crate::rows::CardRow;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use century_core::cards::{CardCatalog, CardId, PointCard};
/// use century_core::core::Inventory;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .add_point_card(PointCard::new(CardId::new(1), Inventory::new(2, 0, 0, 0), 6))
///     .unwrap();
///
/// let row = catalog.point_row(&[CardId::new(1)]).unwrap();
/// assert_eq!(row.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    point_cards: FxHashMap<CardId, PointCard>,
    merchant_cards: FxHashMap<CardId, MerchantCard>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn check_free(&self, id: CardId) -> Result<(), GameError> {
        if self.contains(id) {
            Err(GameError::DuplicateCard(id))
        } else {
            Ok(())
        }
    }

    /// Add a point card.
    pub fn add_point_card(&mut self, card: PointCard) -> Result<(), GameError> {
        self.check_free(card.id)?;
        self.point_cards.insert(card.id, card);
        Ok(())
    }

    /// Add a merchant card.
    pub fn add_merchant_card(&mut self, card: MerchantCard) -> Result<(), GameError> {
        self.check_free(card.id)?;
        self.merchant_cards.insert(card.id, card);
        Ok(())
    }

    /// Get a point card by ID.
    #[must_use]
    pub fn point_card(&self, id: CardId) -> Option<&PointCard> {
        self.point_cards.get(&id)
    }

    /// Get a merchant card by ID.
    #[must_use]
    pub fn merchant_card(&self, id: CardId) -> Option<&MerchantCard> {
        self.merchant_cards.get(&id)
    }

    /// Check if a card ID is registered, of either kind.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.point_cards.contains_key(&id) || self.merchant_cards.contains_key(&id)
    }

    /// Total registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.point_cards.len() + self.merchant_cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a point row, front slot first.
    pub fn point_row(&self, ids: &[CardId]) -> Result<CardRow<PointCard>, GameError> {
        ids.iter()
            .map(|&id| self.point_card(id).copied().ok_or(GameError::UnknownCard(id)))
            .collect()
    }

    /// Build a merchant row, front slot first.
    pub fn merchant_row(&self, ids: &[CardId]) -> Result<CardRow<MerchantCard>, GameError> {
        ids.iter()
            .map(|&id| self.merchant_card(id).copied().ok_or(GameError::UnknownCard(id)))
            .collect()
    }

    /// Point cards matching a predicate.
    pub fn find_point_cards<F>(&self, predicate: F) -> impl Iterator<Item = &PointCard>
    where
        F: Fn(&PointCard) -> bool,
    {
        self.point_cards.values().filter(move |c| predicate(c))
    }
}
