//! # century-core
//!
//! Rules engine for a turn-based spice-trading card game.
//!
//! Players collect spice cubes, spend them to claim point cards from a
//! shared row, and pick up gold and silver coins for claiming from the
//! front slots. Once someone claims enough cards the round is played out,
//! the game ends, and the highest score wins.
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `GameState` owns every piece of match state and
//!    is the only thing that changes it.
//!
//! 2. **Validate, Then Commit**: Rejected moves never leave partial
//!    changes behind.
//!
//! 3. **Injected Rules Data**: Starting cubes, coin supply, thresholds and
//!    scoring weights come from a `GameConfig`, not globals.
//!
//! ## Modules
//!
//! - `core`: Players, inventories, configuration, errors, the game state
//! - `cards`: Point and merchant card definitions, card catalog
//! - `rows`: Ordered face-up card rows
//! - `rules`: End-game scoring
//!
//! ## Example
//!
//! ```
//! use century_core::cards::{CardId, PointCard};
//! use century_core::core::{CoinReward, GameState, Inventory, PlayerId};
//!
//! let card = PointCard::new(CardId::new(1), Inventory::new(2, 0, 0, 0), 6);
//! let mut state = GameState::new(vec![card], Vec::new(), 2, 0).unwrap();
//!
//! let reward = state.claim_point_card(PlayerId::new(0), CardId::new(1)).unwrap();
//! assert_eq!(reward, CoinReward::Gold);
//! assert_eq!(state.gold_coins_left(), 3);
//! ```

pub mod cards;
pub mod core;
pub mod rows;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ClaimRecord, CoinReward, GameConfig, GameError, GamePhase, GameState, Inventory,
    InventoryChange, Player, PlayerId, PlayerKind, PlayerMap, Spice,
};

pub use crate::cards::{CardCatalog, CardId, MerchantAction, MerchantCard, PointCard};

pub use crate::rows::{CardRow, RowCard};

pub use crate::rules::{final_scores, score_player, FinalScores};
