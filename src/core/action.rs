//! Claim settlement records.
//!
//! Coins belong to row slots, not cards: the front slot pays gold while the
//! gold bank lasts and silver after that, the second slot pays silver, and
//! every other slot pays nothing.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Row slot that pays gold (falling back to silver).
pub const GOLD_SLOT: usize = 0;

/// Row slot that pays silver.
pub const SILVER_SLOT: usize = 1;

/// Coin granted for a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinReward {
    /// No coin.
    Nothing,
    /// One gold coin.
    Gold,
    /// One silver coin.
    Silver,
}

impl CoinReward {
    /// Reward for claiming from `slot` given the coins left in the bank.
    ///
    /// ```
    /// use century_core::core::CoinReward;
    ///
    /// assert_eq!(CoinReward::for_slot(0, 1, 4), CoinReward::Gold);
    /// assert_eq!(CoinReward::for_slot(0, 0, 4), CoinReward::Silver);
    /// assert_eq!(CoinReward::for_slot(1, 1, 0), CoinReward::Nothing);
    /// assert_eq!(CoinReward::for_slot(2, 9, 9), CoinReward::Nothing);
    /// ```
    #[must_use]
    pub fn for_slot(slot: usize, gold_left: u32, silver_left: u32) -> Self {
        match slot {
            GOLD_SLOT if gold_left > 0 => CoinReward::Gold,
            GOLD_SLOT | SILVER_SLOT if silver_left > 0 => CoinReward::Silver,
            _ => CoinReward::Nothing,
        }
    }
}

/// A settled claim, kept in the game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// The player who claimed.
    pub player: PlayerId,

    /// The card claimed.
    pub card: CardId,

    /// Row slot the card was claimed from.
    pub slot: usize,

    /// Coin paid out for the slot.
    pub reward: CoinReward,

    /// Round number (starts at 1).
    pub round: u32,
}

impl ClaimRecord {
    /// Create a new claim record.
    #[must_use]
    pub fn new(
        player: PlayerId,
        card: CardId,
        slot: usize,
        reward: CoinReward,
        round: u32,
    ) -> Self {
        Self {
            player,
            card,
            slot,
            reward,
            round,
        }
    }
}
