//! Shared helpers for integration tests.

#![allow(dead_code)]

use century_core::cards::{CardId, PointCard};
use century_core::core::{CoinReward, GameError, GameState, Inventory, PlayerId};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_tracing() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Point card with the given raw id, goal and points.
pub fn point_card(id: u32, goal: Inventory, points: u32) -> PointCard {
    PointCard::new(CardId::new(id), goal, points)
}

/// Free cards worth `points` each, ids `first..first + count`.
pub fn free_cards(first: u32, count: u32, points: u32) -> Vec<PointCard> {
    (first..first + count)
        .map(|id| point_card(id, Inventory::empty(), points))
        .collect()
}

/// Claim whatever sits in `slot`, then restock the row from `deck`.
pub fn claim_slot(
    state: &mut GameState,
    player: PlayerId,
    slot: usize,
    deck: &mut Vec<PointCard>,
) -> Result<CoinReward, GameError> {
    let card = state
        .point_row()
        .get(slot)
        .map(|c| c.id)
        .expect("slot should hold a card");
    let reward = state.claim_point_card(player, card)?;
    state.restock_point_row(card, deck.pop())?;
    Ok(reward)
}
