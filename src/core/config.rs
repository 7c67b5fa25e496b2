//! Game configuration.
//!
//! A `GameConfig` is injected into `GameState` at construction and never
//! changes afterwards. `GameConfig::default()` is the standard rule set:
//! - Up to 5 players
//! - Two gold and two silver coins per player
//! - Game ends after the round in which someone claims their 6th card
//!   (2-3 players) or 5th card (4-5 players)
//! - Gold scores 3, silver scores 1, every non-turmeric cube scores 1

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::inventory::Inventory;

/// Starting cubes per seat in the standard game.
///
/// Later seats get more to offset acting later in each round.
pub const STANDARD_STARTING_INVENTORIES: [Inventory; 5] = [
    Inventory::new(3, 0, 0, 0),
    Inventory::new(4, 0, 0, 0),
    Inventory::new(4, 0, 0, 0),
    Inventory::new(3, 1, 0, 0),
    Inventory::new(3, 1, 0, 0),
];

/// How many claimed cards trigger the final round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimThresholds {
    /// Largest player count that uses `small_table`.
    pub small_table_max_players: usize,

    /// Cards needed at small tables.
    pub small_table: usize,

    /// Cards needed at larger tables.
    pub large_table: usize,
}

impl ClaimThresholds {
    /// Cards a single player must hold to trigger the final round.
    #[must_use]
    pub fn for_players(&self, total_players: usize) -> usize {
        if total_players <= self.small_table_max_players {
            self.small_table
        } else {
            self.large_table
        }
    }
}

impl Default for ClaimThresholds {
    fn default() -> Self {
        Self {
            small_table_max_players: 3,
            small_table: 6,
            large_table: 5,
        }
    }
}

/// End-game scoring weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per gold coin.
    pub gold_value: i64,

    /// Points per silver coin.
    pub silver_value: i64,

    /// Points per held cube other than turmeric.
    pub cube_value: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gold_value: 3,
            silver_value: 1,
            cube_value: 1,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum seated players.
    pub max_players: usize,

    /// Gold coins (and, separately, silver coins) put in the bank per player.
    pub coins_per_player: u32,

    /// Starting cubes indexed by seat position (seat 1 = index 0).
    pub starting_inventories: Vec<Inventory>,

    /// End-game trigger.
    pub thresholds: ClaimThresholds,

    /// End-game scoring weights.
    pub scoring: ScoringConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: STANDARD_STARTING_INVENTORIES.len(),
            coins_per_player: 2,
            starting_inventories: STANDARD_STARTING_INVENTORIES.to_vec(),
            thresholds: ClaimThresholds::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the coins per player.
    #[must_use]
    pub fn with_coins_per_player(mut self, coins: u32) -> Self {
        self.coins_per_player = coins;
        self
    }

    /// Replace the starting inventory table.
    ///
    /// `max_players` shrinks to fit if the table is shorter.
    #[must_use]
    pub fn with_starting_inventories(mut self, inventories: Vec<Inventory>) -> Self {
        self.max_players = self.max_players.min(inventories.len());
        self.starting_inventories = inventories;
        self
    }

    /// Set the end-game trigger.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ClaimThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the scoring weights.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Starting cubes for a 0-based seat position.
    #[must_use]
    pub fn starting_inventory(&self, seat_index: usize) -> Option<Inventory> {
        self.starting_inventories.get(seat_index).copied()
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_players == 0 {
            return Err(GameError::invalid_config("max_players must be at least 1"));
        }
        if self.max_players > usize::from(u8::MAX) {
            return Err(GameError::invalid_config(format!(
                "max_players {} exceeds {}",
                self.max_players,
                u8::MAX
            )));
        }
        if self.starting_inventories.len() < self.max_players {
            return Err(GameError::invalid_config(format!(
                "{} starting inventories for {} seats",
                self.starting_inventories.len(),
                self.max_players
            )));
        }
        if self.thresholds.small_table == 0 || self.thresholds.large_table == 0 {
            return Err(GameError::invalid_config("claim thresholds must be at least 1"));
        }
        Ok(())
    }

    /// Check that `total_players` can be seated under this config.
    pub fn validate_player_count(&self, total_players: usize) -> Result<(), GameError> {
        if total_players == 0 {
            return Err(GameError::invalid_config("at least one player is required"));
        }
        if total_players > self.max_players {
            return Err(GameError::invalid_config(format!(
                "{} players exceeds maximum of {}",
                total_players, self.max_players
            )));
        }
        Ok(())
    }
}
