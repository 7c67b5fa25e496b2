//! Core engine types: players, inventories, configuration, errors, state.
//!
//! `GameState` is the only mutator of a match. Everything else here is
//! plain data it reads or hands back.

pub mod action;
pub mod config;
pub mod error;
pub mod inventory;
pub mod player;
pub mod state;

pub use action::{ClaimRecord, CoinReward, GOLD_SLOT, SILVER_SLOT};
pub use config::{ClaimThresholds, GameConfig, ScoringConfig, STANDARD_STARTING_INVENTORIES};
pub use error::GameError;
pub use inventory::{Inventory, InventoryChange, Spice, SPICE_COUNT};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap};
pub use state::{GamePhase, GameState};
